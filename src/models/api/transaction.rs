//! Transaction module models: execution and receipt status checks.

use serde::{Deserialize, Serialize};

use super::StatusResponse;

pub type ExecutionStatusResponse = StatusResponse<ExecutionStatus>;
pub type ReceiptStatusResponse = StatusResponse<ReceiptStatus>;

/// `getstatus` result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
	pub is_error: String,
	#[serde(default)]
	pub err_description: String,
}

impl ExecutionStatus {
	pub fn failed(&self) -> bool {
		self.is_error == "1"
	}
}

/// `gettxreceiptstatus` result; `status` is empty for pre-Byzantium transactions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReceiptStatus {
	pub status: String,
}

impl ReceiptStatus {
	pub fn succeeded(&self) -> Option<bool> {
		match self.status.as_str() {
			"1" => Some(true),
			"0" => Some(false),
			_ => None,
		}
	}
}
