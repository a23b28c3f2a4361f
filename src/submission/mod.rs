pub mod fields;
pub mod input;

pub use fields::{normalize_questions, validate_new, validate_patch};
pub use input::{QuestionsInput, SubmissionInput};
