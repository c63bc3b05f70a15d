pub mod output;
pub mod page;
