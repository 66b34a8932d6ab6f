//! Configuration loading and validation.
//!
//! Client settings can come from JSON files (one file per client profile) or from
//! environment variables, optionally seeded from a `.env` file.

use std::path::Path;

mod client_config;
mod env;
mod error;

pub use env::EnvConfig;
pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>;

	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), ConfigError>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
