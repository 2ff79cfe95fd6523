use serde::Serialize;
use validator::Validate;

/// One answer option of a [`Question`](super::question::Question).
///
/// Choices are only created through `Question::add_choice` and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Choice {
    id: i32,
    #[validate(length(min = 1, message = "Choice text cannot be empty"))]
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: i32, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
