use std::collections::HashSet;

use crate::dto::grading_dto::{GradedSelection, GradingSummary, SelectionAnswer};
use crate::models::question::Question;

pub struct GradingService;

impl GradingService {
    /// Scores one selection. Full points require the selected set to equal
    /// the set of correct choices.
    pub fn grade_selection(question: &Question, selected: &[i32]) -> GradedSelection {
        let correct_selected = question.correct_selected_choices(selected);
        let expected = question.find_correct_choice_ids();

        let selected_set: HashSet<i32> = selected.iter().copied().collect();
        let expected_set: HashSet<i32> = expected.iter().copied().collect();
        let is_correct = !expected_set.is_empty() && selected_set == expected_set;

        let exceeds_max_selections = selected_set.len() > question.max_selections() as usize;
        if exceeds_max_selections {
            tracing::warn!(
                question_id = question.id(),
                selected = selected_set.len(),
                max_selections = question.max_selections(),
                "selection exceeds max_selections"
            );
        }

        GradedSelection {
            question_id: question.id(),
            question_title: question.title().to_string(),
            selected: selected.to_vec(),
            correct_selected,
            expected,
            points_earned: if is_correct { question.points() } else { 0 },
            max_points: question.points(),
            is_correct,
            exceeds_max_selections,
        }
    }

    /// Grades every question; a question without an answer counts as an
    /// empty selection.
    pub fn grade_all(questions: &[Question], answers: &[SelectionAnswer]) -> GradingSummary {
        let mut summary = GradingSummary::default();

        for q in questions {
            let selected = answers
                .iter()
                .find(|a| a.question_id == q.id())
                .map(|a| a.selected.as_slice())
                .unwrap_or(&[]);

            let graded = Self::grade_selection(q, selected);
            summary.total_max_points += graded.max_points;
            summary.earned_points += graded.points_earned;
            summary.graded.push(graded);
        }

        let mut seen = HashSet::new();
        for duplicate in answers.iter().filter(|a| !seen.insert(a.question_id)) {
            tracing::warn!(
                question_id = duplicate.question_id,
                "duplicate answer ignored, first answer for the question is graded"
            );
        }

        for orphan in answers
            .iter()
            .filter(|a| !questions.iter().any(|q| q.id() == a.question_id))
        {
            tracing::warn!(question_id = orphan.question_id, "answer for unknown question ignored");
        }

        tracing::info!(
            earned = summary.earned_points,
            total = summary.total_max_points,
            "graded {} questions",
            summary.graded.len()
        );
        summary
    }
}
