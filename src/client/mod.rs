//! Client side of the submission board: an HTTP wrapper around the API and a
//! state container holding the local collection and the form draft.

pub mod api;
pub mod controller;
pub mod state;

pub use api::{ClientError, SubmissionApi};
pub use controller::BoardController;
pub use state::{BoardState, DRAFT_QUESTION_SLOTS, Draft, Mode};
