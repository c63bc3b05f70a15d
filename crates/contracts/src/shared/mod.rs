pub mod enum_value;
pub mod query;
pub mod validation;
