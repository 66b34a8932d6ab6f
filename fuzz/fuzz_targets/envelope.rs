#![no_main]

use escan_client::{
	models::{JsonRpcResponse, StatusResponse},
	services::dispatch::{interpret_get_response, interpret_post_response},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &str| {
	let _ = interpret_get_response::<StatusResponse<serde_json::Value>>(body);
	let _ = interpret_post_response::<StatusResponse<serde_json::Value>>(body);
	let _ = interpret_get_response::<JsonRpcResponse<serde_json::Value>>(body);
	let _ = interpret_post_response::<JsonRpcResponse<serde_json::Value>>(body);
});
