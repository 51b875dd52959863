//! Output formatting for fetched resources.

pub mod json;
pub mod pretty;
