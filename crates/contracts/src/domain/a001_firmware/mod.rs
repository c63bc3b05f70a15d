pub mod aggregate;
pub mod dto;
pub mod task;

pub use aggregate::{FirmwareItem, ProductRef, SignMethod};
pub use dto::FirmwareDto;
pub use task::UpgradeTask;
