use std::collections::HashSet;
use std::io::Write;
use std::thread;

use quiz_model::dto::grading_dto::SelectionAnswer;
use quiz_model::services::grading_service::GradingService;
use quiz_model::services::quiz_service::QuizService;
use quiz_model::{Error, Question};
use serde_json::json;

fn write_json(value: serde_json::Value) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", value).expect("write temp file");
    file
}

#[test]
fn question_ids_are_unique_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            thread::spawn(move || {
                (0..50)
                    .map(|i| Question::new(format!("q{}-{}", t, i)).unwrap().id())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: Vec<i32> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("thread panicked"))
        .collect();
    let unique: HashSet<i32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn two_correct_choices_scenario() {
    let mut question = Question::with_scoring("q1", 1, 2).unwrap();
    let c1 = question.add_choice("a", true).unwrap();
    let c2 = question.add_choice("b", true).unwrap();
    assert_eq!(
        question.correct_selected_choices(&[c1.id(), c2.id()]),
        vec![c1.id(), c2.id()]
    );
}

#[test]
fn question_serializes_without_internal_counter() {
    let mut question = Question::new("q1").unwrap();
    question.add_choice("a", true).unwrap();

    let value = serde_json::to_value(&question).unwrap();
    assert_eq!(value["title"], "q1");
    assert_eq!(value["choices"][0]["id"], 1);
    assert_eq!(value["choices"][0]["is_correct"], true);
    assert!(value.get("last_choice_id").is_none());
}

#[test]
fn load_and_grade_quiz_file() {
    let questions_file = write_json(json!([
        {
            "title": "Pick the primes",
            "points": 4,
            "max_selections": 3,
            "choices": [
                { "text": "2", "is_correct": true },
                { "text": "4" },
                { "text": "5", "is_correct": true }
            ]
        },
        {
            "title": "Is water wet?",
            "choices": [{ "text": "yes", "is_correct": true }, { "text": "no" }]
        }
    ]));

    let questions = QuizService::load_questions(questions_file.path()).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].points(), 4);
    assert_eq!(questions[1].points(), 1);

    let answers = vec![
        SelectionAnswer {
            question_id: questions[0].id(),
            selected: vec![3, 1],
        },
        SelectionAnswer {
            question_id: questions[1].id(),
            selected: vec![2],
        },
    ];
    let summary = GradingService::grade_all(&questions, &answers);
    assert_eq!(summary.earned_points, 4);
    assert_eq!(summary.total_max_points, 5);
    assert_eq!(summary.graded[0].correct_selected, vec![3, 1]);
    assert!(summary.graded[1].correct_selected.is_empty());
}

#[test]
fn load_answers_reads_selection_file() {
    let answers_file = write_json(json!([{ "question_id": 7, "selected": [1, 2] }]));
    let answers = QuizService::load_answers(answers_file.path()).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].question_id, 7);
    assert_eq!(answers[0].selected, vec![1, 2]);
}

#[test]
fn invalid_question_in_file_fails_validation() {
    let file = write_json(json!([{ "title": "" }]));
    let err = QuizService::load_questions(file.path()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn malformed_file_reports_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = QuizService::load_questions(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuizService::load_questions(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
