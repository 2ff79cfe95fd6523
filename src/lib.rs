pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Choice, Question};
