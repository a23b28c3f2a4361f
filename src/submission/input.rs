use serde::{Deserialize, Serialize};

/// Raw request body for create and update. Every field may be missing;
/// `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub questions: Option<QuestionsInput>,
}

/// Questions arrive either as a JSON array or as one comma-delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionsInput {
    Sequence(Vec<String>),
    Delimited(String),
}

impl From<Vec<String>> for QuestionsInput {
    fn from(questions: Vec<String>) -> Self {
        QuestionsInput::Sequence(questions)
    }
}

impl From<&str> for QuestionsInput {
    fn from(questions: &str) -> Self {
        QuestionsInput::Delimited(questions.to_string())
    }
}
