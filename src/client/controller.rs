use uuid::Uuid;

use super::api::{ClientError, SubmissionApi};
use super::state::{BoardState, Draft, Mode};

/// Drives the board: issues API calls and applies the matching state
/// transition once the server has answered. Failed calls are logged and
/// leave the state untouched.
pub struct BoardController {
    api: SubmissionApi,
    state: BoardState,
}

impl BoardController {
    pub fn new(api: SubmissionApi) -> Self {
        Self {
            api,
            state: BoardState::default(),
        }
    }

    /// Build a controller and fetch the initial collection.
    pub async fn init(api: SubmissionApi) -> Self {
        let mut controller = Self::new(api);
        // refresh() has already logged the failure.
        if let Err(e) = controller.refresh().await {
            tracing::debug!("Starting with an empty board: {e}");
        }
        controller
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.state.draft
    }

    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let submissions = self
            .api
            .list()
            .await
            .inspect_err(|e| tracing::error!("Error fetching submissions: {e}"))?;
        self.transition(|state| state.loaded(submissions));
        Ok(())
    }

    /// Create or update depending on the current mode.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        match self.state.mode {
            Mode::Create => self.create().await,
            Mode::Edit(_) => self.update().await,
        }
    }

    pub async fn create(&mut self) -> Result<(), ClientError> {
        let record = self
            .api
            .create(&self.state.draft)
            .await
            .inspect_err(|e| tracing::error!("Error creating submission: {e}"))?;
        self.transition(|state| state.created(record));
        Ok(())
    }

    pub async fn update(&mut self) -> Result<(), ClientError> {
        let Some(id) = self.state.editing() else {
            tracing::error!("Error updating submission: {}", ClientError::NotEditing);
            return Err(ClientError::NotEditing);
        };

        let record = self
            .api
            .update(id, &self.state.draft)
            .await
            .inspect_err(|e| tracing::error!("Error updating submission: {e}"))?;
        self.transition(|state| state.updated(record));
        Ok(())
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting submission: {e}"))?;
        self.transition(|state| state.deleted(id));
        Ok(())
    }

    /// Switch the form to edit `id`. Returns false if it is not in the
    /// local collection.
    pub fn edit(&mut self, id: Uuid) -> bool {
        self.transition(|state| state.edit_requested(id));
        let found = self.state.editing() == Some(id);
        if !found {
            tracing::warn!(%id, "Cannot edit submission: not in the local collection");
        }
        found
    }

    pub fn cancel(&mut self) {
        self.transition(BoardState::reset_form);
    }

    fn transition(&mut self, f: impl FnOnce(BoardState) -> BoardState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }
}
