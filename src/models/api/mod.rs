//! Explorer API endpoint catalog and data models.
//!
//! - `endpoint`: the module/action addressing scheme
//! - `envelope`: the status and JSON-RPC response envelopes
//! - one module per API area with its request parameters and typed responses

pub mod account;
pub mod contract;
pub mod gas_tracker;
pub mod proxy;
pub mod stats;
pub mod transaction;

mod endpoint;
mod envelope;

pub use endpoint::{Action, Module};
pub use envelope::{
	EScanResponse, Envelope, GenericJsonRpcResponse, GenericResponse, JsonRpcResponse,
	StatusResponse,
};

/// Ordered flat fields a GET request sends in its query string
///
/// Field names are lower-cased by the encoder; values are sent as returned.
pub trait QueryParams {
	fn query_params(&self) -> Vec<(&'static str, String)>;
}

impl QueryParams for () {
	fn query_params(&self) -> Vec<(&'static str, String)> {
		Vec::new()
	}
}

impl QueryParams for [(&'static str, String)] {
	fn query_params(&self) -> Vec<(&'static str, String)> {
		self.to_vec()
	}
}

impl<const N: usize> QueryParams for [(&'static str, String); N] {
	fn query_params(&self) -> Vec<(&'static str, String)> {
		self.to_vec()
	}
}

impl QueryParams for Vec<(&'static str, String)> {
	fn query_params(&self) -> Vec<(&'static str, String)> {
		self.clone()
	}
}
