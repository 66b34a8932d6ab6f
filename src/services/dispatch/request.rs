//! Typed request dispatch against the explorer API.
//!
//! An [`EScanRequest`] addresses one module/action pair and knows the response type it
//! deserializes into. It is cheap to build and can be sent any number of times, from
//! any number of tasks at once.

use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use serde::Serialize;
use std::{any::type_name, marker::PhantomData, sync::Arc};
use tracing::debug;

use crate::{
	models::{Action, ClientConfig, EScanResponse, Envelope, Module, QueryParams},
	services::dispatch::{interpret_get_response, interpret_post_response, EScanError},
	utils::{to_form_fields, to_query_string},
};

/// Form fields `send_form` adds itself; a payload may not carry them
pub const RESERVED_FORM_FIELDS: [&str; 3] = ["apikey", "module", "action"];

/// A request for one module/action pair, answered with an `R`
#[derive(Debug)]
pub struct EScanRequest<R> {
	config: Arc<ClientConfig>,
	http: Client,
	module: Module,
	action: Action,
	envelope: Envelope,
	_response: PhantomData<fn() -> R>,
}

impl<R> Clone for EScanRequest<R> {
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			http: self.http.clone(),
			module: self.module,
			action: self.action,
			envelope: self.envelope,
			_response: PhantomData,
		}
	}
}

impl<R: EScanResponse> EScanRequest<R> {
	/// Creates a request bound to a configuration and HTTP client
	///
	/// # Errors
	/// Returns a usage error when `R` declares no envelope family.
	pub fn new(
		config: Arc<ClientConfig>,
		http: Client,
		module: Module,
		action: Action,
	) -> Result<Self, EScanError> {
		let Some(envelope) = R::ENVELOPE else {
			return Err(EScanError::usage_error(format!(
				"Response type {} is not rooted in a known envelope family",
				type_name::<R>()
			)));
		};

		Ok(Self {
			config,
			http,
			module,
			action,
			envelope,
			_response: PhantomData,
		})
	}

	pub fn module(&self) -> Module {
		self.module
	}

	pub fn action(&self) -> Action {
		self.action
	}

	pub fn envelope(&self) -> Envelope {
		self.envelope
	}

	/// Full GET URL for `params`, without the API key
	pub fn request_url<Q>(&self, params: &Q) -> String
	where
		Q: QueryParams + ?Sized,
	{
		let mut fields = vec![
			("module", self.module.as_str().to_string()),
			("action", self.action.as_str().to_string()),
		];
		fields.extend(params.query_params());

		format!("{}{}", self.config.base_url, to_query_string(&fields))
	}

	/// Sends the request as a GET with `params` in the query string
	pub async fn send<Q>(&self, params: &Q) -> Result<R, EScanError>
	where
		Q: QueryParams + ?Sized,
	{
		let url = self.request_url(params);
		debug!(module = %self.module, action = %self.action, "GET {}", url);

		let url = format!(
			"{}&apiKey={}",
			url,
			urlencoding::encode(&self.config.api_key)
		);

		self.throttle().await;
		let response = self.http.get(url).send().await?;
		let body = read_body(response).await?;

		interpret_get_response(&body)
	}

	/// Sends the request as a form-encoded POST to the base URL
	///
	/// `payload` must serialize to a flat JSON object; the API key, module and action
	/// are appended to its fields.
	///
	/// # Errors
	/// Returns a usage error, without sending anything, when the payload is not flat or
	/// has a field named like one of [`RESERVED_FORM_FIELDS`].
	pub async fn send_form<P>(&self, payload: &P) -> Result<R, EScanError>
	where
		P: Serialize + ?Sized,
	{
		self.throttle().await;

		let mut fields = to_form_fields(payload)?;
		check_reserved_fields(&fields)?;
		fields.push(("apikey".to_string(), self.config.api_key.clone()));
		fields.push(("module".to_string(), self.module.as_str().to_string()));
		fields.push(("action".to_string(), self.action.as_str().to_string()));

		debug!(
			module = %self.module,
			action = %self.action,
			fields = fields.len(),
			"POST {}",
			self.config.base_url
		);

		let response = self
			.http
			.post(self.config.base_url.as_str())
			.form(&fields)
			.send()
			.await?;
		let body = read_body(response).await?;

		interpret_post_response(&body)
	}

	async fn throttle(&self) {
		if let Some(delay) = self.config.throttle() {
			tokio::time::sleep(delay).await;
		}
	}
}

fn check_reserved_fields(fields: &[(String, String)]) -> Result<(), EScanError> {
	let reserved = fields.iter().find(|(name, _)| {
		RESERVED_FORM_FIELDS
			.iter()
			.any(|reserved| name.eq_ignore_ascii_case(reserved))
	});

	match reserved {
		Some((name, _)) => Err(EScanError::usage_error(format!(
			"Payload field '{}' collides with a field set by the client",
			name
		))),
		None => Ok(()),
	}
}

/// Reads the body of a 2xx response; any other status is a transport error carrying
/// the server's reason phrase
async fn read_body(response: Response) -> Result<String, EScanError> {
	let status = response.status();
	if !status.is_success() {
		let reason = response
			.extensions()
			.get::<ReasonPhrase>()
			.map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
		return Err(EScanError::transport_error(status, reason));
	}
	Ok(response.text().await?)
}
