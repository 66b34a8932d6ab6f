//! Stats module models: native coin supply and price, token supply.

use serde::{Deserialize, Serialize};

use super::StatusResponse;

pub type SupplyResponse = StatusResponse<String>;
pub type PriceResponse = StatusResponse<UsdPrice>;
pub type TokenSupplyResponse = StatusResponse<String>;

/// Last price of the native coin (ETH or BNB)
///
/// BscScan answers `bnbprice` with either `eth*` or `bnb*` field names; both are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UsdPrice {
	#[serde(rename = "ethbtc", alias = "bnbbtc")]
	pub btc: String,
	#[serde(rename = "ethbtc_timestamp", alias = "bnbbtc_timestamp")]
	pub btc_timestamp: String,
	#[serde(rename = "ethusd", alias = "bnbusd")]
	pub usd: String,
	#[serde(rename = "ethusd_timestamp", alias = "bnbusd_timestamp")]
	pub usd_timestamp: String,
}
