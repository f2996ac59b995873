// ABOUTME: idbrief session library - one user's active brief, approach, estimate and quiz
// ABOUTME: Every user action is a pure (state, action) -> state transition

pub mod error;
pub mod reducer;
pub mod session;
pub mod types;

pub use error::{Result, SessionError};
pub use reducer::SessionReducer;
pub use session::Session;
pub use types::{Action, Notice, SessionState, Transition};
