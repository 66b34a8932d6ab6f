//! Errors raised while building a client configuration.
//!
//! Each constructor logs the error at `error` level when it is created.

use std::{error::Error, fmt};
use tracing::error;

use crate::models::EScanNetwork;

/// Reasons a client configuration cannot be loaded or is unusable
#[derive(Debug)]
pub enum ConfigError {
	/// A network name that is not in the catalog
	UnknownNetwork(String),

	/// No usable API key; carries where the key was looked up
	MissingApiKey(String),

	/// The explorer endpoint is missing, ambiguous or not an http(s) URL
	InvalidEndpoint(String),

	/// A setting has a value outside its allowed range
	InvalidSetting(String),

	/// A profile file or environment value could not be parsed
	ParseError(String),

	/// A profile file or directory could not be read
	FileError(String),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::UnknownNetwork(name) => {
				let known: Vec<&str> = EScanNetwork::ALL.iter().map(|(known, _)| *known).collect();
				format!(
					"Unknown network '{}', expected one of: {}",
					name,
					known.join(", ")
				)
			}
			Self::MissingApiKey(source) => format!("No API key found in {}", source),
			Self::InvalidEndpoint(msg) => format!("Invalid endpoint: {}", msg),
			Self::InvalidSetting(msg) => format!("Invalid setting: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::FileError(msg) => format!("File error: {}", msg),
		}
	}

	pub fn unknown_network(name: impl Into<String>) -> Self {
		let error = Self::UnknownNetwork(name.into());
		error!("{}", error.format_message());
		error
	}

	/// `source` names the variable or file the key was expected in
	pub fn missing_api_key(source: impl Into<String>) -> Self {
		let error = Self::MissingApiKey(source.into());
		error!("{}", error.format_message());
		error
	}

	pub fn invalid_endpoint(msg: impl Into<String>) -> Self {
		let error = Self::InvalidEndpoint(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn invalid_setting(msg: impl Into<String>) -> Self {
		let error = Self::InvalidSetting(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
