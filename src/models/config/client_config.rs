//! Client configuration loading and validation.
//!
//! This module implements the ConfigLoader trait for ClientConfig, allowing client
//! profiles to be loaded from JSON files. A profile names either a known network or a
//! custom base URL:
//!
//! ```json
//! { "network": "bsc_mainnet", "api_key": "KEY", "throttle_ms": 200 }
//! { "base_url": "https://explorer.example.org/api", "api_key": "KEY", "is_bsc": false }
//! ```

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::models::{ClientConfig, ConfigError, ConfigLoader, EScanNetwork};

/// On-disk shape of a client profile
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClientConfigFile {
	network: Option<EScanNetwork>,
	base_url: Option<String>,
	api_key: String,
	throttle_ms: Option<u64>,
	is_bsc: Option<bool>,
	timeout_secs: Option<u64>,
}

impl TryFrom<ClientConfigFile> for ClientConfig {
	type Error = ConfigError;

	fn try_from(file: ClientConfigFile) -> Result<Self, Self::Error> {
		let mut config = match (file.network, file.base_url) {
			(Some(_), Some(_)) => {
				return Err(ConfigError::invalid_endpoint(
					"specify either 'network' or 'base_url', not both",
				))
			}
			(Some(network), None) => ClientConfig::new(network, file.api_key),
			(None, Some(base_url)) => {
				ClientConfig::custom(base_url, file.api_key, file.is_bsc.unwrap_or(false))
			}
			(None, None) => {
				return Err(ConfigError::invalid_endpoint(
					"one of 'network' or 'base_url' is required",
				))
			}
		};

		if let Some(is_bsc) = file.is_bsc {
			config.is_bsc = is_bsc;
		}
		config.throttle_ms = file.throttle_ms;
		config.timeout = file.timeout_secs.map(Duration::from_secs);

		Ok(config)
	}
}

impl ConfigLoader for ClientConfig {
	/// Load all client profiles from a directory
	///
	/// Every JSON file in the directory (default `config/clients`) is parsed as a
	/// profile keyed by its file stem. Files that fail to load are skipped.
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let client_dir = path.unwrap_or(Path::new("config/clients"));
		let mut pairs = Vec::new();

		if !client_dir.exists() {
			return Err(ConfigError::file_error("clients directory not found"));
		}

		for entry in fs::read_dir(client_dir)? {
			let entry = entry?;
			let path = entry.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			match Self::load_from_path(&path) {
				Ok(config) => pairs.push((name, config)),
				Err(e) => tracing::warn!("Skipping client profile {}: {}", path.display(), e),
			}
		}

		Ok(T::from_iter(pairs))
	}

	/// Load a client profile from a specific file
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = fs::File::open(path)?;
		let raw: ClientConfigFile = serde_json::from_reader(file)?;
		let config = ClientConfig::try_from(raw)?;

		config.validate()?;

		Ok(config)
	}

	/// Validate the client configuration
	///
	/// The base URL must be an absolute http(s) URL, the API key must not be blank and
	/// a configured timeout must be non-zero.
	fn validate(&self) -> Result<(), ConfigError> {
		let url = Url::parse(&self.base_url).map_err(|e| {
			ConfigError::invalid_endpoint(format!("'{}' is not a URL: {}", self.base_url, e))
		})?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::invalid_endpoint(format!(
				"scheme '{}' is not http(s)",
				url.scheme()
			)));
		}

		if self.api_key.trim().is_empty() {
			return Err(ConfigError::missing_api_key("client configuration"));
		}

		if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
			return Err(ConfigError::invalid_setting(
				"timeout must be greater than zero",
			));
		}

		Ok(())
	}
}
