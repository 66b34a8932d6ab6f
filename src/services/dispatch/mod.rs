//! Request dispatch for the explorer API.
//!
//! - `request`: builds and sends typed GET and POST requests
//! - `interpret`: classifies response bodies into results or API errors
//! - `error`: the error taxonomy every request resolves to

mod error;
mod interpret;
mod request;

pub use error::{EScanError, UNKNOWN_API_ERROR};
pub use interpret::{interpret_get_response, interpret_post_response};
pub use request::{EScanRequest, RESERVED_FORM_FIELDS};
