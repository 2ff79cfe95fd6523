//! Grades a set of answers against a quiz file.
//!
//! `quiz-model <questions.json> <answers.json>` prints the grading summary as
//! JSON. Questions receive ids 1..n in file order, which is what the
//! `question_id` fields of the answers file refer to.

use anyhow::Context;
use quiz_model::{
    config::{get_config, init_config, LogFormat},
    services::{grading_service::GradingService, quiz_service::QuizService},
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid QUIZ_LOG_LEVEL '{}'", config.log_level))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    let mut args = std::env::args().skip(1);
    let (Some(questions_path), Some(answers_path)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: quiz-model <questions.json> <answers.json>");
    };

    let questions = QuizService::load_questions(&questions_path)
        .with_context(|| format!("failed to load questions from {}", questions_path))?;
    let answers = QuizService::load_answers(&answers_path)
        .with_context(|| format!("failed to load answers from {}", answers_path))?;

    let summary = GradingService::grade_all(&questions, &answers);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
