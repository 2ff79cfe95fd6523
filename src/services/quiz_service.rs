use std::fs;
use std::path::Path;

use crate::dto::grading_dto::SelectionAnswer;
use crate::dto::question_dto::CreateQuestionPayload;
use crate::error::Result;
use crate::models::question::Question;
use crate::utils::validation::validate;

pub struct QuizService;

impl QuizService {
    /// Builds a question and its choices. The whole payload is validated
    /// first, so a bad choice never leaves a half-built question behind.
    pub fn build_question(payload: CreateQuestionPayload) -> Result<Question> {
        validate(&payload)?;

        let mut question =
            Question::with_scoring(payload.title, payload.points, payload.max_selections)?;
        for choice in payload.choices {
            question.add_choice(choice.text, choice.is_correct)?;
        }
        Ok(question)
    }

    pub fn build_questions(payloads: Vec<CreateQuestionPayload>) -> Result<Vec<Question>> {
        payloads.into_iter().map(Self::build_question).collect()
    }

    pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<Question>> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let payloads: Vec<CreateQuestionPayload> = serde_json::from_str(&raw)?;
        let questions = Self::build_questions(payloads)?;
        tracing::info!("Loaded {} questions from {}", questions.len(), path.display());
        Ok(questions)
    }

    pub fn load_answers(path: impl AsRef<Path>) -> Result<Vec<SelectionAnswer>> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let answers: Vec<SelectionAnswer> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} answers from {}", answers.len(), path.display());
        Ok(answers)
    }
}
