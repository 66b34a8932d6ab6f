//! Gas tracker module models.

use serde::{Deserialize, Serialize};

use super::StatusResponse;

pub type GasOracleResponse = StatusResponse<GasOracle>;

/// Gas price suggestions in gwei
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GasOracle {
	pub last_block: String,
	pub safe_gas_price: String,
	pub propose_gas_price: String,
	pub fast_gas_price: String,
	#[serde(rename = "suggestBaseFee", default)]
	pub suggest_base_fee: Option<String>,
	#[serde(rename = "gasUsedRatio", default)]
	pub gas_used_ratio: Option<String>,
}
