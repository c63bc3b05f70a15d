//! Alarm output dialog
//!
//! - view_model.rs: prefill state machine and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OutputSave;
pub use view_model::{load_output, prefill_outcome, OutputSaveViewModel};
