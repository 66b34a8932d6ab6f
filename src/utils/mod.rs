//! Utility modules for common functionality.
//!
//! - logging: Subscriber setup for applications embedding the client
//! - query: Query string and form field encoding

pub mod logging;
pub mod query;

pub use query::{to_form_fields, to_query_string};
