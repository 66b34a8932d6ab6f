//! Response body interpretation.
//!
//! GET and POST answers are classified the same way except for the status envelope
//! failure check: GET looks for a `NotOk` message prefix, POST looks at the `status`
//! flag. The two checks disagree on bodies such as `{"status": "1", "message": "NOTOK"}`
//! and are kept as separate functions.

use crate::{
	models::{EScanResponse, Envelope, GenericJsonRpcResponse, GenericResponse},
	services::dispatch::EScanError,
};

/// Interprets the body of a successful GET request
pub fn interpret_get_response<R: EScanResponse>(body: &str) -> Result<R, EScanError> {
	if let Some(response) = json_rpc_response::<R>(body)? {
		return Ok(response);
	}

	let generic: GenericResponse = serde_json::from_str(body)?;
	if generic.has_not_ok_message() {
		return Err(api_failure(&generic));
	}

	Ok(serde_json::from_str(body)?)
}

/// Interprets the body of a successful POST request
pub fn interpret_post_response<R: EScanResponse>(body: &str) -> Result<R, EScanError> {
	if let Some(response) = json_rpc_response::<R>(body)? {
		return Ok(response);
	}

	let generic: GenericResponse = serde_json::from_str(body)?;
	if !generic.is_ok() {
		return Err(api_failure(&generic));
	}

	Ok(serde_json::from_str(body)?)
}

/// Deserializes the body directly when `R` is a JSON-RPC type and the body carries a
/// `jsonrpc` field; the status envelope is not consulted in that case
fn json_rpc_response<R: EScanResponse>(body: &str) -> Result<Option<R>, EScanError> {
	if R::ENVELOPE != Some(Envelope::JsonRpc) {
		return Ok(None);
	}

	let generic: GenericJsonRpcResponse = serde_json::from_str(body)?;
	if generic.jsonrpc.is_none() {
		return Ok(None);
	}

	Ok(Some(serde_json::from_str(body)?))
}

fn api_failure(generic: &GenericResponse) -> EScanError {
	match generic.result_message() {
		Some(message) => EScanError::api_error(message),
		None => EScanError::unknown_api_error(),
	}
}
