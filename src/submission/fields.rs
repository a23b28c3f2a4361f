use crate::models::{NewSubmission, SubmissionPatch};

use super::input::{QuestionsInput, SubmissionInput};

pub const CREATE_REQUIRED_MESSAGE: &str =
    "All fields are required and questions must be a non-empty array of strings.";

pub const UPDATE_EMPTY_MESSAGE: &str =
    "Fields cannot be empty and questions must be a non-empty array of strings.";

/// Resolve questions into their canonical ordered form.
///
/// Sequences are kept as sent. A delimited string is split on commas and each
/// segment trimmed; empty segments keep their position.
pub fn normalize_questions(questions: QuestionsInput) -> Vec<String> {
    match questions {
        QuestionsInput::Sequence(list) => list,
        QuestionsInput::Delimited(raw) => raw
            .split(',')
            .map(|q| q.trim().to_string())
            .collect(),
    }
}

/// Validate a create request. All four fields must be present and non-empty.
pub fn validate_new(input: SubmissionInput) -> Result<NewSubmission, String> {
    let questions = input.questions.map(normalize_questions).unwrap_or_default();

    match (
        non_empty(input.name),
        non_empty(input.country),
        non_empty(input.company),
    ) {
        (Some(name), Some(country), Some(company)) if !questions.is_empty() => Ok(NewSubmission {
            name,
            country,
            company,
            questions,
        }),
        _ => Err(CREATE_REQUIRED_MESSAGE.to_string()),
    }
}

/// Validate an update request. Omitted fields stay `None` and are left
/// untouched by the store; supplied fields must not be empty. An empty
/// questions string counts as omitted.
pub fn validate_patch(input: SubmissionInput) -> Result<SubmissionPatch, String> {
    let questions = input
        .questions
        .filter(|q| !matches!(q, QuestionsInput::Delimited(raw) if raw.is_empty()))
        .map(normalize_questions);

    let patch = SubmissionPatch {
        name: input.name,
        country: input.country,
        company: input.company,
        questions,
    };

    let blank_text = [&patch.name, &patch.country, &patch.company]
        .into_iter()
        .flatten()
        .any(|value| value.is_empty());
    let blank_questions = patch.questions.as_ref().is_some_and(|q| q.is_empty());

    if blank_text || blank_questions {
        return Err(UPDATE_EMPTY_MESSAGE.to_string());
    }

    Ok(patch)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
