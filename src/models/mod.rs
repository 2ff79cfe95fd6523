pub mod choice;
pub mod question;

pub use choice::Choice;
pub use question::Question;
