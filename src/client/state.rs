use serde::Serialize;
use uuid::Uuid;

use crate::models::Submission;

/// Number of empty question inputs a fresh form starts with.
pub const DRAFT_QUESTION_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Create,
    Edit(Uuid),
}

/// The in-progress form. Serializes as the create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draft {
    pub name: String,
    pub country: String,
    pub company: String,
    pub questions: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            company: String::new(),
            questions: vec![String::new(); DRAFT_QUESTION_SLOTS],
        }
    }
}

impl Draft {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            name: submission.name.clone(),
            country: submission.country.clone(),
            company: submission.company.clone(),
            questions: submission.questions.clone(),
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_country(&mut self, value: impl Into<String>) {
        self.country = value.into();
    }

    pub fn set_company(&mut self, value: impl Into<String>) {
        self.company = value.into();
    }

    /// Replace the question at `index`. Out-of-range indexes are ignored.
    pub fn set_question(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.questions.get_mut(index) {
            *slot = value.into();
        }
    }
}

/// Local view of the collection plus the form. Transitions consume the
/// previous state and return the next one; they run only after the server
/// has confirmed the change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub submissions: Vec<Submission>,
    pub draft: Draft,
    pub mode: Mode,
}

impl BoardState {
    pub fn loaded(self, submissions: Vec<Submission>) -> Self {
        Self {
            submissions,
            ..self
        }
    }

    pub fn created(mut self, record: Submission) -> Self {
        self.submissions.push(record);
        self.draft = Draft::default();
        self
    }

    /// Load the record into the draft and switch to edit mode. Unknown ids
    /// leave the state as it was.
    pub fn edit_requested(mut self, id: Uuid) -> Self {
        let Some(record) = self.submissions.iter().find(|s| s.id == id) else {
            return self;
        };
        self.draft = Draft::from_submission(record);
        self.mode = Mode::Edit(id);
        self
    }

    pub fn updated(mut self, record: Submission) -> Self {
        if let Some(slot) = self.submissions.iter_mut().find(|s| s.id == record.id) {
            *slot = record;
        }
        self.reset_form()
    }

    pub fn deleted(mut self, id: Uuid) -> Self {
        self.submissions.retain(|s| s.id != id);
        self
    }

    pub fn reset_form(self) -> Self {
        Self {
            draft: Draft::default(),
            mode: Mode::Create,
            ..self
        }
    }

    pub fn editing(&self) -> Option<Uuid> {
        match self.mode {
            Mode::Edit(id) => Some(id),
            Mode::Create => None,
        }
    }
}
