use crate::{
	models::{Action, Module, PriceResponse, SupplyResponse, TokenSupplyResponse},
	services::{client::EScanClient, dispatch::EScanError},
};

/// Endpoints of the `stats` module
///
/// Supply and price actions are named after the chain's native coin, so the action
/// sent depends on the configured dialect.
#[derive(Clone, Copy, Debug)]
pub struct Stats<'a> {
	client: &'a EScanClient,
}

impl<'a> Stats<'a> {
	pub(crate) fn new(client: &'a EScanClient) -> Self {
		Self { client }
	}

	/// Total native coin supply, in wei
	pub async fn supply(&self) -> Result<SupplyResponse, EScanError> {
		self.client
			.request(Module::Stats, supply_action(self.client.config().is_bsc))?
			.send(&())
			.await
	}

	/// Latest native coin price in BTC and USD
	pub async fn price(&self) -> Result<PriceResponse, EScanError> {
		self.client
			.request(Module::Stats, price_action(self.client.config().is_bsc))?
			.send(&())
			.await
	}

	/// Total supply of the ERC-20 token at `contract_address`
	pub async fn token_supply(
		&self,
		contract_address: &str,
	) -> Result<TokenSupplyResponse, EScanError> {
		self.client
			.request(Module::Stats, Action::TokenSupply)?
			.send(&[("contractaddress", contract_address.to_string())])
			.await
	}
}

fn supply_action(is_bsc: bool) -> Action {
	if is_bsc {
		Action::BnbSupply
	} else {
		Action::EthSupply
	}
}

fn price_action(is_bsc: bool) -> Action {
	if is_bsc {
		Action::BnbPrice
	} else {
		Action::EthPrice
	}
}
