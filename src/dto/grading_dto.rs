use serde::{Deserialize, Serialize};

/// A caller's selection for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionAnswer {
    pub question_id: i32,
    #[serde(default)]
    pub selected: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedSelection {
    pub question_id: i32,
    pub question_title: String,
    pub selected: Vec<i32>,
    /// Selected ids that point at correct choices, in selection order.
    pub correct_selected: Vec<i32>,
    /// Ids of every correct choice, in choice order.
    pub expected: Vec<i32>,
    pub points_earned: i32,
    pub max_points: i32,
    pub is_correct: bool,
    pub exceeds_max_selections: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingSummary {
    pub earned_points: i32,
    pub total_max_points: i32,
    pub graded: Vec<GradedSelection>,
}
