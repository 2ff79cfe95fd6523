pub mod grading_dto;
pub mod question_dto;
