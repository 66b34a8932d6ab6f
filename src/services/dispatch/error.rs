//! Dispatcher error types and handling.
//!
//! Every failure a request can end in maps to one variant. Constructors log the error
//! once, where it is detected; callers propagate it unchanged.

use reqwest::StatusCode;
use std::{error::Error, fmt};
use tracing::error;

/// Marker carried by an API error whose result payload has no usable message
pub const UNKNOWN_API_ERROR: &str = "Unknown";

/// Represents possible errors of a dispatched request
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum EScanError {
	/// The request was declared incorrectly (response type, payload or arguments)
	UsageError(String),

	/// The server answered with a non-2xx status
	TransportError { status: u16, reason: String },

	/// The request could not be sent or its body could not be read
	ConnectionError(String),

	/// The API reported a logical failure in its envelope
	ApiError(String),

	/// The body does not match the declared response type
	DeserializationError(serde_json::Error),
}

impl EScanError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::UsageError(msg) => format!("Usage error: {}", msg),
			Self::TransportError { status, reason } => {
				format!("Server issue ({}): {}", status, reason)
			}
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::ApiError(msg) => format!("Error with API result: ({})", msg),
			Self::DeserializationError(err) => format!("Deserialization error: {}", err),
		}
	}

	/// Creates a new usage error with logging
	pub fn usage_error(msg: impl Into<String>) -> Self {
		let error = Self::UsageError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new transport error from a response status with logging
	///
	/// `reason` is the phrase the server sent on its status line; the canonical phrase
	/// for `status` is used when it is absent.
	pub fn transport_error(status: StatusCode, reason: Option<String>) -> Self {
		let reason = reason.unwrap_or_else(|| {
			status.canonical_reason().unwrap_or("Unknown").to_string()
		});
		let error = Self::TransportError {
			status: status.as_u16(),
			reason,
		};
		error!("{}", error.format_message());
		error
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new API error with logging
	pub fn api_error(msg: impl Into<String>) -> Self {
		let error = Self::ApiError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates the API error used when the failure payload carries no message
	pub fn unknown_api_error() -> Self {
		Self::api_error(UNKNOWN_API_ERROR)
	}

	/// Creates a new deserialization error with logging
	pub fn deserialization_error(err: serde_json::Error) -> Self {
		let error = Self::DeserializationError(err);
		error!("{}", error.format_message());
		error
	}

	/// HTTP status of a transport error
	pub fn status_code(&self) -> Option<u16> {
		match self {
			Self::TransportError { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl fmt::Display for EScanError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for EScanError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::DeserializationError(err) => Some(err),
			_ => None,
		}
	}
}

impl From<reqwest::Error> for EScanError {
	fn from(err: reqwest::Error) -> Self {
		Self::connection_error(err.to_string())
	}
}

impl From<serde_json::Error> for EScanError {
	fn from(err: serde_json::Error) -> Self {
		Self::deserialization_error(err)
	}
}
