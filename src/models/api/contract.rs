//! Contract module models: ABI and source retrieval, source verification.

use serde::{Deserialize, Serialize};

use super::StatusResponse;

/// `getabi` result: the ABI as a JSON-encoded string
pub type AbiResponse = StatusResponse<String>;
pub type SourceCodeResponse = StatusResponse<Vec<SourceCode>>;
/// `verifysourcecode` result: the GUID to poll with `checkverifystatus`
pub type VerifySubmissionResponse = StatusResponse<String>;
pub type VerifyStatusResponse = StatusResponse<String>;

/// Verified source entry returned by `getsourcecode`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceCode {
	#[serde(default)]
	pub source_code: String,
	#[serde(rename = "ABI", default)]
	pub abi: String,
	#[serde(default)]
	pub contract_name: String,
	#[serde(default)]
	pub compiler_version: String,
	#[serde(default)]
	pub optimization_used: String,
	#[serde(default)]
	pub runs: String,
	#[serde(default)]
	pub constructor_arguments: String,
	#[serde(rename = "EVMVersion", default)]
	pub evm_version: String,
	#[serde(default)]
	pub library: String,
	#[serde(default)]
	pub license_type: String,
	#[serde(default)]
	pub proxy: String,
	#[serde(default)]
	pub implementation: String,
	#[serde(default)]
	pub swarm_source: String,
}

impl SourceCode {
	/// Unverified contracts come back with an empty source and a placeholder ABI
	pub fn is_verified(&self) -> bool {
		!self.source_code.is_empty()
	}

	pub fn is_proxy(&self) -> bool {
		self.proxy == "1"
	}
}

/// Form payload for `verifysourcecode`
///
/// Sent as a POST body. Unset optional fields are left out of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifySourceCodePayload {
	#[serde(rename = "contractaddress")]
	pub contract_address: String,
	#[serde(rename = "sourceCode")]
	pub source_code: String,
	/// `solidity-single-file` or `solidity-standard-json-input`
	#[serde(rename = "codeformat")]
	pub code_format: String,
	#[serde(rename = "contractname")]
	pub contract_name: String,
	#[serde(rename = "compilerversion")]
	pub compiler_version: String,
	#[serde(rename = "optimizationUsed", skip_serializing_if = "Option::is_none")]
	pub optimization_used: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub runs: Option<u32>,
	/// Field name misspelled on the API side
	#[serde(rename = "constructorArguements", skip_serializing_if = "Option::is_none")]
	pub constructor_arguments: Option<String>,
	#[serde(rename = "evmversion", skip_serializing_if = "Option::is_none")]
	pub evm_version: Option<String>,
	#[serde(rename = "licenseType", skip_serializing_if = "Option::is_none")]
	pub license_type: Option<u8>,
}
