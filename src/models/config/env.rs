//! Client configuration from environment variables.
//!
//! Recognised variables:
//! - `ESCAN_API_KEY` (required)
//! - `ESCAN_NETWORK` short network name, or `ESCAN_BASE_URL` for a custom endpoint
//! - `ESCAN_IS_BSC` dialect flag for a custom endpoint
//! - `ESCAN_THROTTLE_MS` delay before each request
//! - `ESCAN_TIMEOUT_SECS` overall request timeout

use std::{str::FromStr, time::Duration};

use crate::models::{ClientConfig, ConfigError, ConfigLoader, EScanNetwork};

/// Loads a [`ClientConfig`] from the process environment
pub struct EnvConfig;

impl EnvConfig {
	pub const API_KEY: &'static str = "ESCAN_API_KEY";
	pub const NETWORK: &'static str = "ESCAN_NETWORK";
	pub const BASE_URL: &'static str = "ESCAN_BASE_URL";
	pub const IS_BSC: &'static str = "ESCAN_IS_BSC";
	pub const THROTTLE_MS: &'static str = "ESCAN_THROTTLE_MS";
	pub const TIMEOUT_SECS: &'static str = "ESCAN_TIMEOUT_SECS";

	/// Reads the configuration from the environment, loading a `.env` file first if one
	/// is present in the working directory or its parents
	pub fn load() -> Result<ClientConfig, ConfigError> {
		if let Ok(path) = dotenvy::dotenv() {
			tracing::debug!("Loaded environment from {}", path.display());
		}
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary variable source
	///
	/// Without `ESCAN_NETWORK` or `ESCAN_BASE_URL` the Etherscan mainnet is used.
	pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let api_key = lookup(Self::API_KEY)
			.filter(|key| !key.trim().is_empty())
			.ok_or_else(|| ConfigError::missing_api_key(Self::API_KEY))?;

		let mut config = match (lookup(Self::NETWORK), lookup(Self::BASE_URL)) {
			(Some(_), Some(_)) => {
				return Err(ConfigError::invalid_endpoint(format!(
					"set either {} or {}, not both",
					Self::NETWORK,
					Self::BASE_URL
				)))
			}
			(Some(network), None) => ClientConfig::new(network.parse()?, api_key),
			(None, Some(base_url)) => ClientConfig::custom(base_url, api_key, false),
			(None, None) => ClientConfig::new(EScanNetwork::MAIN_NET, api_key),
		};

		if let Some(is_bsc) = parse_var::<bool, _>(&lookup, Self::IS_BSC)? {
			config.is_bsc = is_bsc;
		}
		config.throttle_ms = parse_var(&lookup, Self::THROTTLE_MS)?;
		config.timeout = parse_var(&lookup, Self::TIMEOUT_SECS)?.map(Duration::from_secs);

		config.validate()?;
		Ok(config)
	}
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
	F: Fn(&str) -> Option<String>,
{
	lookup(key)
		.map(|raw| {
			raw.trim().parse::<T>().map_err(|e| {
				ConfigError::parse_error(format!("{} has invalid value '{}': {}", key, raw, e))
			})
		})
		.transpose()
}
