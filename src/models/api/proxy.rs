//! Proxy module models. The proxy forwards calls to a node and answers with
//! JSON-RPC envelopes.

use serde::{Deserialize, Serialize};

use super::JsonRpcResponse;

pub type BlockNumberResponse = JsonRpcResponse<String>;
pub type TransactionByHashResponse = JsonRpcResponse<Option<RpcTransaction>>;
pub type TransactionCountResponse = JsonRpcResponse<String>;
pub type GasPriceResponse = JsonRpcResponse<String>;

/// Transaction object as returned by `eth_getTransactionByHash`, quantities hex-encoded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
	pub hash: String,
	pub block_hash: Option<String>,
	pub block_number: Option<String>,
	pub from: String,
	pub to: Option<String>,
	pub gas: String,
	pub gas_price: Option<String>,
	#[serde(default)]
	pub max_fee_per_gas: Option<String>,
	#[serde(default)]
	pub max_priority_fee_per_gas: Option<String>,
	pub input: String,
	pub nonce: String,
	pub transaction_index: Option<String>,
	pub value: String,
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
	#[serde(default)]
	pub chain_id: Option<String>,
	#[serde(default)]
	pub v: Option<String>,
	#[serde(default)]
	pub r: Option<String>,
	#[serde(default)]
	pub s: Option<String>,
}

impl RpcTransaction {
	/// `true` once the transaction is included in a block
	pub fn is_mined(&self) -> bool {
		self.block_number.is_some()
	}
}
