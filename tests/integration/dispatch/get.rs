use crate::integration::mocks::{base_url, client_for, ok_body, query, API_KEY};
use escan_client::{
	models::{
		Action, BalanceResponse, ClientConfig, EScanResponse, JsonRpcResponse, Module,
		StatusResponse,
	},
	services::{
		client::EScanClient,
		dispatch::{EScanError, UNKNOWN_API_ERROR},
	},
};
use mockito::Matcher;
use serde::Deserialize;
use serde_json::json;
use tokio::{
	io::{AsyncReadExt, AsyncWriteExt},
	net::TcpListener,
};

#[tokio::test]
async fn test_get_sends_module_action_fields_and_key() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api")
		.match_query(query(
			"account",
			"balance",
			&[("address", "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"), ("tag", "latest")],
		))
		.with_status(200)
		.with_body(ok_body(json!("40891626854930000000999")))
		.create_async()
		.await;

	let client = client_for(&server);
	let request = client
		.request::<BalanceResponse>(Module::Account, Action::Balance)
		.unwrap();
	let params = [
		("address", "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae".to_string()),
		("tag", "latest".to_string()),
	];

	assert_eq!(
		request.request_url(&params),
		format!(
			"{}?module=account&action=balance&address=0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae&tag=latest",
			base_url(&server)
		)
	);

	let response = request.send(&params).await.unwrap();
	assert!(response.is_ok());
	assert_eq!(response.result, "40891626854930000000999");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_not_ok_message_is_api_error() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(
			json!({"status": "0", "message": "NotOk-InvalidApiKey", "result": "bad key"})
				.to_string(),
		)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.accounts()
		.balance("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae", "latest")
		.await
		.unwrap_err();

	assert!(matches!(&err, EScanError::ApiError(msg) if msg == "bad key"));
	assert!(err.to_string().contains("bad key"));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_not_ok_with_array_result_is_unknown() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(json!({"status": "0", "message": "NOTOK", "result": []}).to_string())
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client.accounts().balance("0xabc", "latest").await.unwrap_err();
	assert!(matches!(&err, EScanError::ApiError(msg) if msg == UNKNOWN_API_ERROR));
}

#[tokio::test]
async fn test_get_status_zero_without_not_ok_is_success() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(
			json!({"status": "0", "message": "No transactions found", "result": []}).to_string(),
		)
		.create_async()
		.await;

	let client = client_for(&server);
	let response = client
		.request::<StatusResponse<Vec<serde_json::Value>>>(Module::Account, Action::TxList)
		.unwrap()
		.send(&[("address", "0xabc".to_string())])
		.await
		.unwrap();
	assert!(!response.is_ok());
	assert!(response.result.is_empty());
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(500)
		// A body that would otherwise classify as an API error
		.with_body(json!({"status": "0", "message": "NOTOK", "result": "ignored"}).to_string())
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client.accounts().balance("0xabc", "latest").await.unwrap_err();

	assert!(matches!(
		&err,
		EScanError::TransportError { status: 500, reason } if reason == "Internal Server Error"
	));
	assert_eq!(err.status_code(), Some(500));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_error_keeps_server_reason_phrase() {
	// mockito only sends canonical reasons, so answer from a bare socket
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let address = listener.local_addr().unwrap();
	let server = tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		let mut request = Vec::new();
		let mut buffer = [0u8; 1024];
		while !request.windows(4).any(|window| window == b"\r\n\r\n") {
			let read = socket.read(&mut buffer).await.unwrap();
			if read == 0 {
				break;
			}
			request.extend_from_slice(&buffer[..read]);
		}
		socket
			.write_all(
				b"HTTP/1.1 500 Upstream Exploded\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
			)
			.await
			.unwrap();
		socket.shutdown().await.unwrap();
	});

	let config = ClientConfig::custom(format!("http://{}/api", address), API_KEY, false);
	let client = EScanClient::new(config).unwrap();
	let err = client.stats().supply().await.unwrap_err();

	assert!(matches!(
		&err,
		EScanError::TransportError { status: 500, reason } if reason == "Upstream Exploded"
	));
	server.await.unwrap();
}

#[tokio::test]
async fn test_rate_limited_is_transport_error() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(429)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client.gas_tracker().gas_oracle().await.unwrap_err();
	assert_eq!(err.status_code(), Some(429));
}

#[tokio::test]
async fn test_undeclared_response_family_makes_no_call() {
	#[derive(Debug, Deserialize)]
	struct Bare {
		#[allow(dead_code)]
		result: String,
	}
	impl EScanResponse for Bare {}

	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", Matcher::Any)
		.match_query(Matcher::Any)
		.expect(0)
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client
		.request::<Bare>(Module::Account, Action::Balance)
		.unwrap_err();

	assert!(matches!(err, EScanError::UsageError(_)));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_shape_mismatch_is_deserialization_error() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(ok_body(json!({"unexpected": true})))
		.create_async()
		.await;

	let client = client_for(&server);
	let err = client.accounts().balance("0xabc", "latest").await.unwrap_err();

	assert!(matches!(err, EScanError::DeserializationError(_)));
	assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_json_rpc_type_accepts_status_envelope_success() {
	let mut server = mockito::Server::new_async().await;
	server
		.mock("GET", "/api")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(json!({"status": "1", "message": "OK", "result": "0x10"}).to_string())
		.create_async()
		.await;

	let client = client_for(&server);
	let response = client
		.request::<JsonRpcResponse<String>>(Module::Proxy, Action::EthBlockNumber)
		.unwrap()
		.send(&())
		.await
		.unwrap();
	assert_eq!(response.jsonrpc, None);
	assert_eq!(response.quantity(), Some(16));
}

#[tokio::test]
async fn test_api_key_is_percent_encoded() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api")
		.match_query(Matcher::UrlEncoded("apiKey".into(), "a&b c".into()))
		.with_status(200)
		.with_body(ok_body(json!("1")))
		.create_async()
		.await;

	let config = ClientConfig::custom(base_url(&server), "a&b c", false);
	let client = EScanClient::new(config).unwrap();
	client.stats().supply().await.unwrap();
	mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
	// Nothing listens on port 1
	let config = ClientConfig::custom("http://127.0.0.1:1/api", API_KEY, false);
	let client = EScanClient::new(config).unwrap();

	let err = client.proxy().block_number().await.unwrap_err();
	assert!(matches!(err, EScanError::ConnectionError(_)));
}
