//! Firmware save dialog
//!
//! - form.rs: typed form state and validation
//! - view_model.rs: ViewModel with commands
//! - view.rs: Leptos component (pure UI)

mod form;
mod view;
mod view_model;

pub use form::FirmwareForm;
pub use view::FirmwareSave;
pub use view_model::FirmwareSaveViewModel;
