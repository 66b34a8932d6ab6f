use crate::{
	models::{
		Action, BalanceMultiResponse, BalanceResponse, InternalTxListResponse, Module,
		TokenBalanceResponse, TokenTransferResponse, TxListParams, TxListResponse,
	},
	services::{client::EScanClient, dispatch::EScanError},
};

/// Most addresses a single `balancemulti` call accepts
pub const MAX_BALANCE_MULTI_ADDRESSES: usize = 20;

/// Endpoints of the `account` module
#[derive(Clone, Copy, Debug)]
pub struct Accounts<'a> {
	client: &'a EScanClient,
}

impl<'a> Accounts<'a> {
	pub(crate) fn new(client: &'a EScanClient) -> Self {
		Self { client }
	}

	/// Native coin balance of `address`, in wei, at block `tag` (`latest`, `pending`, ...)
	pub async fn balance(&self, address: &str, tag: &str) -> Result<BalanceResponse, EScanError> {
		self.client
			.request(Module::Account, Action::Balance)?
			.send(&[("address", address.to_string()), ("tag", tag.to_string())])
			.await
	}

	/// Balances of up to [`MAX_BALANCE_MULTI_ADDRESSES`] addresses in one call
	///
	/// # Errors
	/// Returns a usage error, without sending anything, for an empty list or one that
	/// exceeds the limit.
	pub async fn balance_multi<S>(
		&self,
		addresses: &[S],
		tag: &str,
	) -> Result<BalanceMultiResponse, EScanError>
	where
		S: AsRef<str>,
	{
		let address = join_addresses(addresses)?;
		self.client
			.request(Module::Account, Action::BalanceMulti)?
			.send(&[("address", address), ("tag", tag.to_string())])
			.await
	}

	/// Normal transactions of an address, paged and bounded by block range
	pub async fn tx_list(&self, params: &TxListParams) -> Result<TxListResponse, EScanError> {
		self.client
			.request(Module::Account, Action::TxList)?
			.send(params)
			.await
	}

	/// Internal transactions (contract-to-contract value transfers) of an address
	pub async fn tx_list_internal(
		&self,
		params: &TxListParams,
	) -> Result<InternalTxListResponse, EScanError> {
		self.client
			.request(Module::Account, Action::TxListInternal)?
			.send(params)
			.await
	}

	/// ERC-20 transfers, filtered by address, token contract or both
	pub async fn token_transfers(
		&self,
		params: &TxListParams,
	) -> Result<TokenTransferResponse, EScanError> {
		self.client
			.request(Module::Account, Action::TokenTx)?
			.send(params)
			.await
	}

	/// ERC-20 balance of `address` for the token at `contract_address`
	pub async fn token_balance(
		&self,
		contract_address: &str,
		address: &str,
		tag: &str,
	) -> Result<TokenBalanceResponse, EScanError> {
		self.client
			.request(Module::Account, Action::TokenBalance)?
			.send(&[
				("contractaddress", contract_address.to_string()),
				("address", address.to_string()),
				("tag", tag.to_string()),
			])
			.await
	}
}

fn join_addresses<S: AsRef<str>>(addresses: &[S]) -> Result<String, EScanError> {
	if addresses.is_empty() {
		return Err(EScanError::usage_error(
			"At least one address is required for a multi-address balance",
		));
	}
	if addresses.len() > MAX_BALANCE_MULTI_ADDRESSES {
		return Err(EScanError::usage_error(format!(
			"At most {} addresses are allowed for a multi-address balance, got {}",
			MAX_BALANCE_MULTI_ADDRESSES,
			addresses.len()
		)));
	}

	Ok(addresses
		.iter()
		.map(|address| address.as_ref())
		.collect::<Vec<_>>()
		.join(","))
}
