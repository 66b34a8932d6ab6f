//! Account module models: balances, transaction lists and token transfers.

use serde::{Deserialize, Serialize};

use super::{QueryParams, StatusResponse};

pub type BalanceResponse = StatusResponse<String>;
pub type BalanceMultiResponse = StatusResponse<Vec<AccountBalance>>;
pub type TxListResponse = StatusResponse<Vec<Transaction>>;
pub type InternalTxListResponse = StatusResponse<Vec<InternalTransaction>>;
pub type TokenTransferResponse = StatusResponse<Vec<TokenTransfer>>;
pub type TokenBalanceResponse = StatusResponse<String>;

/// Result sort order for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
	#[default]
	Asc,
	Desc,
}

impl Sort {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}
}

/// Parameters shared by `txlist`, `txlistinternal` and `tokentx`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxListParams {
	pub address: String,
	/// Only honoured by `tokentx`
	pub contract_address: Option<String>,
	pub start_block: Option<u64>,
	pub end_block: Option<u64>,
	pub page: Option<u32>,
	pub offset: Option<u32>,
	pub sort: Option<Sort>,
}

impl TxListParams {
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			..Default::default()
		}
	}

	pub fn blocks(mut self, start_block: u64, end_block: u64) -> Self {
		self.start_block = Some(start_block);
		self.end_block = Some(end_block);
		self
	}

	pub fn page(mut self, page: u32, offset: u32) -> Self {
		self.page = Some(page);
		self.offset = Some(offset);
		self
	}

	pub fn sort(mut self, sort: Sort) -> Self {
		self.sort = Some(sort);
		self
	}

	pub fn contract_address(mut self, contract_address: impl Into<String>) -> Self {
		self.contract_address = Some(contract_address.into());
		self
	}
}

impl QueryParams for TxListParams {
	fn query_params(&self) -> Vec<(&'static str, String)> {
		let mut params = Vec::new();
		if let Some(contract_address) = &self.contract_address {
			params.push(("contractaddress", contract_address.clone()));
		}
		if !self.address.is_empty() {
			params.push(("address", self.address.clone()));
		}
		if let Some(start_block) = self.start_block {
			params.push(("startblock", start_block.to_string()));
		}
		if let Some(end_block) = self.end_block {
			params.push(("endblock", end_block.to_string()));
		}
		if let Some(page) = self.page {
			params.push(("page", page.to_string()));
		}
		if let Some(offset) = self.offset {
			params.push(("offset", offset.to_string()));
		}
		if let Some(sort) = self.sort {
			params.push(("sort", sort.as_str().to_string()));
		}
		params
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountBalance {
	pub account: String,
	pub balance: String,
}

/// Normal transaction as listed by `txlist`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	pub block_number: String,
	pub time_stamp: String,
	pub hash: String,
	#[serde(default)]
	pub nonce: String,
	#[serde(default)]
	pub block_hash: String,
	#[serde(default)]
	pub transaction_index: String,
	pub from: String,
	pub to: String,
	pub value: String,
	#[serde(default)]
	pub gas: String,
	#[serde(default)]
	pub gas_price: String,
	#[serde(default)]
	pub is_error: String,
	#[serde(rename = "txreceipt_status", default)]
	pub tx_receipt_status: String,
	#[serde(default)]
	pub input: String,
	#[serde(default)]
	pub contract_address: String,
	#[serde(default)]
	pub cumulative_gas_used: String,
	#[serde(default)]
	pub gas_used: String,
	#[serde(default)]
	pub confirmations: String,
	#[serde(default)]
	pub method_id: Option<String>,
	#[serde(default)]
	pub function_name: Option<String>,
}

impl Transaction {
	pub fn failed(&self) -> bool {
		self.is_error == "1"
	}
}

/// Internal (message call) transaction as listed by `txlistinternal`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransaction {
	pub block_number: String,
	pub time_stamp: String,
	pub hash: String,
	pub from: String,
	pub to: String,
	pub value: String,
	#[serde(default)]
	pub contract_address: String,
	#[serde(default)]
	pub input: String,
	#[serde(rename = "type", default)]
	pub kind: String,
	#[serde(default)]
	pub gas: String,
	#[serde(default)]
	pub gas_used: String,
	#[serde(default)]
	pub trace_id: String,
	#[serde(default)]
	pub is_error: String,
	#[serde(default)]
	pub err_code: String,
}

/// ERC-20 transfer event as listed by `tokentx`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
	pub block_number: String,
	pub time_stamp: String,
	pub hash: String,
	#[serde(default)]
	pub nonce: String,
	#[serde(default)]
	pub block_hash: String,
	pub from: String,
	pub contract_address: String,
	pub to: String,
	pub value: String,
	pub token_name: String,
	pub token_symbol: String,
	pub token_decimal: String,
	#[serde(default)]
	pub transaction_index: String,
	#[serde(default)]
	pub gas: String,
	#[serde(default)]
	pub gas_price: String,
	#[serde(default)]
	pub gas_used: String,
	#[serde(default)]
	pub cumulative_gas_used: String,
	#[serde(default)]
	pub input: String,
	#[serde(default)]
	pub confirmations: String,
}
