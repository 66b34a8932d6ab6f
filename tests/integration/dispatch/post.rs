use crate::integration::mocks::{client_for, API_KEY};
use escan_client::{
	models::{Action, JsonRpcResponse, Module, StatusResponse},
	services::dispatch::{EScanError, UNKNOWN_API_ERROR},
};
use mockito::Matcher;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Submission {
	contractaddress: &'static str,
	runs: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	evmversion: Option<&'static str>,
}

fn submission() -> Submission {
	Submission {
		contractaddress: "0xabc",
		runs: 200,
		evmversion: None,
	}
}

#[tokio::test]
async fn test_post_sends_form_with_key_module_and_action() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/api")
		.match_header("content-type", "application/x-www-form-urlencoded")
		.match_body(Matcher::AllOf(vec![
			Matcher::UrlEncoded("contractaddress".into(), "0xabc".into()),
			Matcher::UrlEncoded("runs".into(), "200".into()),
			Matcher::UrlEncoded("apikey".into(), API_KEY.into()),
			Matcher::UrlEncoded("module".into(), "contract".into()),
			Matcher::UrlEncoded("action".into(), "verifysourcecode".into()),
		]))
		.with_status(200)
		.with_body(
			json!({"status": "1", "message": "OK", "result": "ezq878u486pzijkvvmerl6a9mzwhv6sefgvqi5tkwceejc7tvn"})
				.to_string(),
		)
		.create_async()
		.await;

	let client = client_for(&server);
	let response = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&submission())
		.await
		.unwrap();

	assert_eq!(
		response.result,
		"ezq878u486pzijkvvmerl6a9mzwhv6sefgvqi5tkwceejc7tvn"
	);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_post_status_zero_with_array_result_is_unknown() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("POST", "/api")
		.with_status(200)
		.with_body(json!({"status": "0", "message": "NOTOK", "result": ["a", "b"]}).to_string())
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&submission())
		.await
		.unwrap_err();

	assert!(matches!(&err, EScanError::ApiError(msg) if msg == UNKNOWN_API_ERROR));
}

#[tokio::test]
async fn test_post_status_zero_embeds_result() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("POST", "/api")
		.with_status(200)
		.with_body(
			json!({"status": "0", "message": "OK", "result": "Contract source code already verified"})
				.to_string(),
		)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&submission())
		.await
		.unwrap_err();

	assert!(
		matches!(&err, EScanError::ApiError(msg) if msg == "Contract source code already verified")
	);
}

#[tokio::test]
async fn test_post_json_rpc_skips_status_check() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("POST", "/api")
		.with_status(200)
		// No status field: the status check would reject this body
		.with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x4a817c800"}).to_string())
		.create_async()
		.await;

	let client = client_for(&server);
	let response = client
		.request::<JsonRpcResponse<String>>(Module::Proxy, Action::EthGasPrice)
		.unwrap()
		.send_form(&json!({}))
		.await
		.unwrap();

	assert_eq!(response.jsonrpc.as_deref(), Some("2.0"));
	assert_eq!(response.quantity(), Some(20_000_000_000));
}

#[tokio::test]
async fn test_post_nested_payload_makes_no_call() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", Matcher::Any)
		.expect(0)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&json!({"libraries": {"SafeMath": "0x1"}}))
		.await
		.unwrap_err();

	assert!(matches!(err, EScanError::UsageError(_)));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_post_server_error_is_transport_error() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("POST", "/api")
		.with_status(503)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&submission())
		.await
		.unwrap_err();

	assert!(matches!(
		&err,
		EScanError::TransportError { status: 503, reason } if reason == "Service Unavailable"
	));
}

#[tokio::test]
async fn test_post_payload_cannot_override_client_fields() {
	#[derive(Serialize)]
	struct Overriding {
		apikey: &'static str,
		module: &'static str,
		x: u32,
	}

	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", Matcher::Any)
		.expect(0)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&Overriding {
			apikey: "payloadkey",
			module: "account",
			x: 1,
		})
		.await
		.unwrap_err();

	assert!(matches!(&err, EScanError::UsageError(msg) if msg.contains("'apikey'")));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_null_fields_as_empty_values() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/api")
		.match_body(Matcher::AllOf(vec![
			Matcher::UrlEncoded("constructorarguements".into(), "".into()),
			Matcher::UrlEncoded("runs".into(), "200".into()),
		]))
		.with_status(200)
		.with_body(json!({"status": "1", "message": "OK", "result": "guid"}).to_string())
		.create_async()
		.await;

	let client = client_for(&server);
	let response = client
		.request::<StatusResponse<String>>(Module::Contract, Action::VerifySourceCode)
		.unwrap()
		.send_form(&json!({"constructorarguements": null, "runs": 200}))
		.await
		.unwrap();

	assert_eq!(response.result, "guid");
	mock.assert_async().await;
}
