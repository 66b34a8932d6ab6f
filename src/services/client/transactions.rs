use crate::{
	models::{Action, ExecutionStatusResponse, Module, ReceiptStatusResponse},
	services::{client::EScanClient, dispatch::EScanError},
};

/// Endpoints of the `transaction` module
#[derive(Clone, Copy, Debug)]
pub struct Transactions<'a> {
	client: &'a EScanClient,
}

impl<'a> Transactions<'a> {
	pub(crate) fn new(client: &'a EScanClient) -> Self {
		Self { client }
	}

	/// Contract execution status of a transaction
	pub async fn status(&self, txhash: &str) -> Result<ExecutionStatusResponse, EScanError> {
		self.client
			.request(Module::Transaction, Action::GetStatus)?
			.send(&[("txhash", txhash.to_string())])
			.await
	}

	/// Receipt status of a post-Byzantium transaction
	pub async fn receipt_status(&self, txhash: &str) -> Result<ReceiptStatusResponse, EScanError> {
		self.client
			.request(Module::Transaction, Action::GetTxReceiptStatus)?
			.send(&[("txhash", txhash.to_string())])
			.await
	}
}
