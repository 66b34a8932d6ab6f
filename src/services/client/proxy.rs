use crate::{
	models::{
		Action, BlockNumberResponse, GasPriceResponse, Module, TransactionByHashResponse,
		TransactionCountResponse,
	},
	services::{client::EScanClient, dispatch::EScanError},
};

/// Endpoints of the `proxy` module
///
/// Results come back in the JSON-RPC envelope with hex-encoded quantities. When the
/// explorer itself rejects a call (bad key, rate limit) it still answers with a status
/// envelope, which surfaces as an API error.
#[derive(Clone, Copy, Debug)]
pub struct Proxy<'a> {
	client: &'a EScanClient,
}

impl<'a> Proxy<'a> {
	pub(crate) fn new(client: &'a EScanClient) -> Self {
		Self { client }
	}

	/// Most recent block number, hex-encoded
	pub async fn block_number(&self) -> Result<BlockNumberResponse, EScanError> {
		self.client
			.request(Module::Proxy, Action::EthBlockNumber)?
			.send(&())
			.await
	}

	/// Transaction by hash; `result` is `None` for unknown hashes
	pub async fn transaction_by_hash(
		&self,
		txhash: &str,
	) -> Result<TransactionByHashResponse, EScanError> {
		self.client
			.request(Module::Proxy, Action::EthGetTransactionByHash)?
			.send(&[("txhash", txhash.to_string())])
			.await
	}

	/// Number of transactions sent from `address` at block `tag`
	pub async fn transaction_count(
		&self,
		address: &str,
		tag: &str,
	) -> Result<TransactionCountResponse, EScanError> {
		self.client
			.request(Module::Proxy, Action::EthGetTransactionCount)?
			.send(&[("address", address.to_string()), ("tag", tag.to_string())])
			.await
	}

	/// Current gas price in wei, hex-encoded
	pub async fn gas_price(&self) -> Result<GasPriceResponse, EScanError> {
		self.client
			.request(Module::Proxy, Action::EthGasPrice)?
			.send(&())
			.await
	}
}
