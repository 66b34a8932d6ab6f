use crate::{
	models::{Action, GasOracleResponse, Module},
	services::{client::EScanClient, dispatch::EScanError},
};

/// Endpoints of the `gastracker` module
#[derive(Clone, Copy, Debug)]
pub struct GasTracker<'a> {
	client: &'a EScanClient,
}

impl<'a> GasTracker<'a> {
	pub(crate) fn new(client: &'a EScanClient) -> Self {
		Self { client }
	}

	/// Safe, proposed and fast gas prices in gwei
	pub async fn gas_oracle(&self) -> Result<GasOracleResponse, EScanError> {
		self.client
			.request(Module::GasTracker, Action::GasOracle)?
			.send(&())
			.await
	}
}
