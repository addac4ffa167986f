//! HTTP request handlers, one module per resource.

pub mod ai;
pub mod project;
pub mod task;
