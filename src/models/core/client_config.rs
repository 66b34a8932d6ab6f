use std::time::Duration;

use crate::models::EScanNetwork;

/// Settings shared by every request a client sends.
///
/// Built once and never mutated afterwards; the client keeps it behind an `Arc` and
/// every dispatcher reads from that shared copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	/// Explorer API base URL, e.g. `https://api.etherscan.io/api`
	pub base_url: String,
	/// API key appended to every request
	pub api_key: String,
	/// Delay applied before each outbound call
	pub throttle_ms: Option<u64>,
	/// Whether the endpoint speaks the BscScan dialect
	pub is_bsc: bool,
	/// Overall request timeout; the HTTP library default applies when unset
	pub timeout: Option<Duration>,
}

impl ClientConfig {
	/// Creates a configuration for one of the known networks
	pub fn new(network: EScanNetwork, api_key: impl Into<String>) -> Self {
		Self {
			base_url: network.into(),
			api_key: api_key.into(),
			throttle_ms: None,
			is_bsc: network.is_bsc(),
			timeout: None,
		}
	}

	/// Creates a configuration for a self-hosted or otherwise unlisted explorer
	pub fn custom(base_url: impl Into<String>, api_key: impl Into<String>, is_bsc: bool) -> Self {
		Self {
			base_url: base_url.into(),
			api_key: api_key.into(),
			throttle_ms: None,
			is_bsc,
			timeout: None,
		}
	}

	pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
		self.throttle_ms = Some(throttle_ms);
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// The throttle delay, if one is configured and positive
	pub fn throttle(&self) -> Option<Duration> {
		self.throttle_ms
			.filter(|ms| *ms > 0)
			.map(Duration::from_millis)
	}
}
