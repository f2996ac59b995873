// ABOUTME: Owned interactive session driving the reducer
// ABOUTME: Holds the current state and the randomness provider for a single user

use crate::error::Result;
use crate::reducer::SessionReducer;
use crate::types::{Action, Notice, SessionState};
use idbrief_core::RandomSource;
use tracing::debug;

/// Single-user session; actions are processed one at a time to completion
pub struct Session<R: RandomSource> {
    state: SessionState,
    reducer: SessionReducer,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(rng: R) -> Self {
        Self {
            state: SessionState::default(),
            reducer: SessionReducer::new(),
            rng,
        }
    }

    /// Apply an action. The state is replaced only on success without a notice.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Notice>> {
        let transition = self.reducer.apply(&self.state, action, &mut self.rng)?;
        if transition.notice.is_none() {
            self.state = transition.state;
        }
        debug!(%action, notice = ?transition.notice, "Dispatched action");
        Ok(transition.notice)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }
}
