//! Client handle for one explorer endpoint.

use reqwest::Client;
use std::sync::Arc;

use crate::{
	models::{Action, ClientConfig, EScanResponse, Module},
	services::{
		client::{Accounts, Contracts, GasTracker, Proxy, Stats, Transactions},
		dispatch::{EScanError, EScanRequest},
	},
};

/// Client for an Etherscan-family explorer API
///
/// Cloning is cheap: clones share the configuration and the HTTP connection pool, so a
/// single client can serve any number of concurrent tasks.
#[derive(Clone, Debug)]
pub struct EScanClient {
	config: Arc<ClientConfig>,
	http: Client,
}

impl EScanClient {
	/// Creates a client for the given configuration
	///
	/// # Errors
	/// Returns a connection error if the HTTP client cannot be initialised.
	pub fn new(config: ClientConfig) -> Result<Self, EScanError> {
		let mut builder = Client::builder();
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}

		let http = builder.build().map_err(|e| {
			EScanError::connection_error(format!("Failed to create HTTP client: {}", e))
		})?;

		Ok(Self {
			config: Arc::new(config),
			http,
		})
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Builds a request for an arbitrary module/action pair
	///
	/// The typed sub-clients cover the common endpoints; this is the way to reach the
	/// rest of the API with a caller-defined response type.
	pub fn request<R: EScanResponse>(
		&self,
		module: Module,
		action: Action,
	) -> Result<EScanRequest<R>, EScanError> {
		EScanRequest::new(self.config.clone(), self.http.clone(), module, action)
	}

	pub fn accounts(&self) -> Accounts<'_> {
		Accounts::new(self)
	}

	pub fn contracts(&self) -> Contracts<'_> {
		Contracts::new(self)
	}

	pub fn transactions(&self) -> Transactions<'_> {
		Transactions::new(self)
	}

	/// Node calls forwarded by the explorer, answered in the JSON-RPC envelope
	pub fn proxy(&self) -> Proxy<'_> {
		Proxy::new(self)
	}

	pub fn stats(&self) -> Stats<'_> {
		Stats::new(self)
	}

	pub fn gas_tracker(&self) -> GasTracker<'_> {
		GasTracker::new(self)
	}
}
