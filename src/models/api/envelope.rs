//! Response envelopes returned by the explorer API.
//!
//! Two shapes exist:
//!
//! - the status envelope, `{"status": "1", "message": "OK", "result": ...}`, used by
//!   every module except `proxy`
//! - the JSON-RPC envelope, `{"jsonrpc": "2.0", "id": 1, "result": ...}`, returned by
//!   the `proxy` module which forwards calls to a node
//!
//! The generic variants are only used to classify a body before it is deserialized
//! into the declared response type.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Envelope family a response type is rooted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
	Status,
	JsonRpc,
}

/// A type the dispatcher can deserialize a response into.
///
/// Implementations declare the envelope family they belong to through `ENVELOPE`.
/// Types that leave it at `None` are rejected when a request is built, before any
/// network call.
pub trait EScanResponse: DeserializeOwned + Send + 'static {
	const ENVELOPE: Option<Envelope> = None;
}

/// Untyped status envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenericResponse {
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub result: Value,
}

impl GenericResponse {
	/// `true` when the API reported `status == "1"`
	pub fn is_ok(&self) -> bool {
		self.status == "1"
	}

	/// `true` when the message starts with `NotOk`, ignoring case
	pub fn has_not_ok_message(&self) -> bool {
		self.message
			.get(..5)
			.is_some_and(|prefix| prefix.eq_ignore_ascii_case("NotOk"))
	}

	/// Diagnostic text carried in `result` by a failed call.
	///
	/// `None` when the result is a JSON array, which carries no usable message.
	pub fn result_message(&self) -> Option<String> {
		match &self.result {
			Value::Array(_) => None,
			Value::String(message) => Some(message.clone()),
			Value::Null => Some(String::new()),
			other => Some(other.to_string()),
		}
	}
}

/// Untyped JSON-RPC envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenericJsonRpcResponse {
	#[serde(default)]
	pub jsonrpc: Option<String>,
	#[serde(default)]
	pub id: Value,
	#[serde(default)]
	pub result: Value,
}

/// Typed status envelope, the response of every non-proxy endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatusResponse<T> {
	pub status: String,
	pub message: String,
	pub result: T,
}

impl<T> StatusResponse<T> {
	pub fn is_ok(&self) -> bool {
		self.status == "1"
	}
}

impl<T: DeserializeOwned + Send + 'static> EScanResponse for StatusResponse<T> {
	const ENVELOPE: Option<Envelope> = Some(Envelope::Status);
}

/// Typed JSON-RPC envelope, the response of the proxy endpoints
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JsonRpcResponse<T> {
	pub jsonrpc: Option<String>,
	#[serde(default)]
	pub id: Value,
	pub result: T,
}

impl JsonRpcResponse<String> {
	/// Decodes a hex quantity result such as `"0x10d4f"`
	pub fn quantity(&self) -> Option<u128> {
		let digits = self.result.strip_prefix("0x")?;
		u128::from_str_radix(digits, 16).ok()
	}
}

impl<T: DeserializeOwned + Send + 'static> EScanResponse for JsonRpcResponse<T> {
	const ENVELOPE: Option<Envelope> = Some(Envelope::JsonRpc);
}
