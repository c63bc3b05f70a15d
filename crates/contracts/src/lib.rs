//! Wire contracts shared by the device console UI: query/response envelopes,
//! firmware records and alarm data-exchange configuration.

pub mod domain;
pub mod shared;
