//! Controller Layer
//!
//! Handles user intents and keeps the stored collection, the row view model
//! and the form state in step.

mod dialogs;
mod manager;
mod state;


pub use dialogs::Dialogs;
pub use manager::{ListManager, Outcome, RowTarget};
pub use state::{EditMode, FormState, ListState};
