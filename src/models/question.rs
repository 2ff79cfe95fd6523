use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use super::choice::Choice;
use crate::error::{Error, Result};
use crate::utils::validation::validate;

pub const DEFAULT_POINTS: i32 = 1;
pub const DEFAULT_MAX_SELECTIONS: i32 = 1;

static NEXT_QUESTION_ID: AtomicI32 = AtomicI32::new(1);

fn next_question_id() -> Result<i32> {
    take_id(&NEXT_QUESTION_ID)
}

/// Hands out the counter's current value. Fails once `i32::MAX` has been
/// issued instead of wrapping around.
fn take_id(counter: &AtomicI32) -> Result<i32> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        .map_err(|_| Error::IdsExhausted)
}

#[derive(Debug, Serialize, Validate)]
pub struct Question {
    id: i32,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    title: String,
    #[validate(range(
        min = 1,
        max = 100,
        message = "Points must be between 1 and 100"
    ))]
    points: i32,
    #[validate(range(min = 1, message = "Max selections must be at least 1"))]
    max_selections: i32,
    choices: Vec<Choice>,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    last_choice_id: i32,
}

impl Question {
    /// Creates a question worth one point that accepts a single selection.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Self::with_scoring(title, DEFAULT_POINTS, DEFAULT_MAX_SELECTIONS)
    }

    /// Validates the attributes and assigns the next process-wide id.
    ///
    /// A rejected question never receives an id.
    pub fn with_scoring(
        title: impl Into<String>,
        points: i32,
        max_selections: i32,
    ) -> Result<Self> {
        let mut question = Self {
            id: 0,
            title: title.into(),
            points,
            max_selections,
            choices: Vec::new(),
            created_at: Utc::now(),
            last_choice_id: 0,
        };
        validate(&question)?;

        question.id = next_question_id()?;
        tracing::debug!(question_id = question.id, points, max_selections, "question created");
        Ok(question)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn max_selections(&self) -> i32 {
        self.max_selections
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a choice with the next sequential id and returns a copy of it.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<Choice> {
        let choice = Choice::new(self.last_choice_id + 1, text.into(), is_correct);
        validate(&choice)?;

        self.last_choice_id = choice.id();
        self.choices.push(choice.clone());
        tracing::debug!(
            question_id = self.id,
            choice_id = choice.id(),
            is_correct,
            "choice added"
        );
        Ok(choice)
    }

    /// Removes the choice with `choice_id`. Remaining ids are left as they are.
    pub fn remove_choice_by_id(&mut self, choice_id: i32) -> Option<Choice> {
        let idx = self.choices.iter().position(|c| c.id() == choice_id)?;
        let removed = self.choices.remove(idx);
        tracing::debug!(question_id = self.id, choice_id, "choice removed");
        Some(removed)
    }

    /// Drops every choice. Ids of later choices continue from the last one issued.
    pub fn remove_all_choices(&mut self) {
        tracing::debug!(
            question_id = self.id,
            removed = self.choices.len(),
            "all choices removed"
        );
        self.choices.clear();
    }

    /// Returns the selected ids that point at correct choices, in selection order.
    pub fn correct_selected_choices(&self, selected_ids: &[i32]) -> Vec<i32> {
        let correct: HashSet<i32> = self.find_correct_choice_ids().into_iter().collect();
        selected_ids
            .iter()
            .copied()
            .filter(|id| correct.contains(id))
            .collect()
    }

    pub fn find_correct_choice_ids(&self) -> Vec<i32> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(|c| c.id())
            .collect()
    }
}
