//! Shared helpers for building clients against a mock explorer.

use escan_client::{models::ClientConfig, services::client::EScanClient};
use mockito::{Matcher, ServerGuard};

pub const API_KEY: &str = "test-api-key";

/// Base URL of the mock explorer API
pub fn base_url(server: &ServerGuard) -> String {
	format!("{}/api", server.url())
}

pub fn config_for(server: &ServerGuard) -> ClientConfig {
	ClientConfig::custom(base_url(server), API_KEY, false)
}

pub fn client_for(server: &ServerGuard) -> EScanClient {
	EScanClient::new(config_for(server)).unwrap()
}

/// Matches the module/action pair, the given fields and the API key in a query string
pub fn query(module: &str, action: &str, fields: &[(&str, &str)]) -> Matcher {
	let mut matchers = vec![
		Matcher::UrlEncoded("module".into(), module.into()),
		Matcher::UrlEncoded("action".into(), action.into()),
		Matcher::UrlEncoded("apiKey".into(), API_KEY.into()),
	];
	matchers.extend(
		fields
			.iter()
			.map(|(name, value)| Matcher::UrlEncoded(name.to_string(), value.to_string())),
	);
	Matcher::AllOf(matchers)
}

pub fn ok_body(result: serde_json::Value) -> String {
	serde_json::json!({
		"status": "1",
		"message": "OK",
		"result": result
	})
	.to_string()
}
