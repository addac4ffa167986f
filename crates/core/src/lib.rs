//! Shared domain types for the taskboard platform.

pub mod error;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use status::TaskStatus;
pub use types::{DbId, Timestamp};
