use crate::{
	models::{
		AbiResponse, Action, Module, SourceCodeResponse, VerifySourceCodePayload,
		VerifyStatusResponse, VerifySubmissionResponse,
	},
	services::{client::EScanClient, dispatch::EScanError},
};

/// Endpoints of the `contract` module
#[derive(Clone, Copy, Debug)]
pub struct Contracts<'a> {
	client: &'a EScanClient,
}

impl<'a> Contracts<'a> {
	pub(crate) fn new(client: &'a EScanClient) -> Self {
		Self { client }
	}

	/// ABI of a verified contract, as a JSON-encoded string
	pub async fn abi(&self, address: &str) -> Result<AbiResponse, EScanError> {
		self.client
			.request(Module::Contract, Action::GetAbi)?
			.send(&[("address", address.to_string())])
			.await
	}

	/// Verified source code and compiler settings; unverified contracts come back with
	/// empty fields
	pub async fn source_code(&self, address: &str) -> Result<SourceCodeResponse, EScanError> {
		self.client
			.request(Module::Contract, Action::GetSourceCode)?
			.send(&[("address", address.to_string())])
			.await
	}

	/// Submits source code for verification
	///
	/// Sent as a form POST. The returned GUID is polled with
	/// [`check_verify_status`](Self::check_verify_status).
	pub async fn verify_source_code(
		&self,
		payload: &VerifySourceCodePayload,
	) -> Result<VerifySubmissionResponse, EScanError> {
		self.client
			.request(Module::Contract, Action::VerifySourceCode)?
			.send_form(payload)
			.await
	}

	/// Outcome of a verification submitted with
	/// [`verify_source_code`](Self::verify_source_code), keyed by its GUID
	pub async fn check_verify_status(&self, guid: &str) -> Result<VerifyStatusResponse, EScanError> {
		self.client
			.request(Module::Contract, Action::CheckVerifyStatus)?
			.send(&[("guid", guid.to_string())])
			.await
	}
}
