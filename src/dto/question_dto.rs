use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChoicePayload {
    #[validate(length(min = 1, message = "Choice text cannot be empty"))]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestionPayload {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[serde(default = "default_points")]
    #[validate(range(min = 1, max = 100, message = "Points must be between 1 and 100"))]
    pub points: i32,

    #[serde(default = "default_max_selections")]
    #[validate(range(min = 1, message = "Max selections must be at least 1"))]
    pub max_selections: i32,

    #[serde(default)]
    #[validate(nested)]
    pub choices: Vec<CreateChoicePayload>,
}

fn default_points() -> i32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> i32 {
    DEFAULT_MAX_SELECTIONS
}
