pub mod detail;
pub mod details;
pub mod list;
pub mod tasks;
