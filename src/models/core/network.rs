use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::ConfigError;

/// An explorer API endpoint together with the dialect it speaks.
///
/// The catalog is fixed: each network is an associated constant. BscScan deployments
/// set `is_bsc`, which switches the few actions whose names differ between the two
/// dialects (`bnbprice` instead of `ethprice`, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EScanNetwork {
	base_url: &'static str,
	is_bsc: bool,
}

impl EScanNetwork {
	pub const MAIN_NET: Self = Self::new("https://api.etherscan.io/api", false);
	pub const SEPOLIA_NET: Self = Self::new("https://api-sepolia.etherscan.io/api", false);
	pub const GOERLI_NET: Self = Self::new("https://api-goerli.etherscan.io/api", false);
	pub const ROPSTEN_NET: Self = Self::new("https://api-ropsten.etherscan.io/api", false);
	pub const KOVAN_NET: Self = Self::new("https://api-kovan.etherscan.io/api", false);
	pub const RINKEBY_NET: Self = Self::new("https://api-rinkeby.etherscan.io/api", false);
	pub const BSC_MAIN_NET: Self = Self::new("https://api.bscscan.com/api", true);
	pub const BSC_TEST_NET: Self = Self::new("https://api-testnet.bscscan.com/api", true);

	/// Every known network with the short name used in configuration files
	pub const ALL: [(&'static str, Self); 8] = [
		("mainnet", Self::MAIN_NET),
		("sepolia", Self::SEPOLIA_NET),
		("goerli", Self::GOERLI_NET),
		("ropsten", Self::ROPSTEN_NET),
		("kovan", Self::KOVAN_NET),
		("rinkeby", Self::RINKEBY_NET),
		("bsc_mainnet", Self::BSC_MAIN_NET),
		("bsc_testnet", Self::BSC_TEST_NET),
	];

	const fn new(base_url: &'static str, is_bsc: bool) -> Self {
		Self { base_url, is_bsc }
	}

	pub const fn base_url(&self) -> &'static str {
		self.base_url
	}

	pub const fn is_bsc(&self) -> bool {
		self.is_bsc
	}

	/// Short configuration name of this network
	pub fn name(&self) -> &'static str {
		Self::ALL
			.iter()
			.find(|(_, network)| network == self)
			.map(|(name, _)| *name)
			.unwrap_or("custom")
	}
}

impl fmt::Display for EScanNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.base_url)
	}
}

impl AsRef<str> for EScanNetwork {
	fn as_ref(&self) -> &str {
		self.base_url
	}
}

impl From<EScanNetwork> for String {
	fn from(network: EScanNetwork) -> Self {
		network.base_url.to_string()
	}
}

impl FromStr for EScanNetwork {
	type Err = ConfigError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		let wanted = name.trim().to_ascii_lowercase().replace('-', "_");
		Self::ALL
			.iter()
			.find(|(known, _)| *known == wanted)
			.map(|(_, network)| *network)
			.ok_or_else(|| ConfigError::unknown_network(name))
	}
}

impl Serialize for EScanNetwork {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}

impl<'de> Deserialize<'de> for EScanNetwork {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let name = String::deserialize(deserializer)?;
		name.parse().map_err(serde::de::Error::custom)
	}
}
