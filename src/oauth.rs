//! Glue between the adapter and the `oauth2` crate.
//!
//! The code exchange itself belongs to the OAuth2 core. This module hands that core a client
//! pre-wired with the Salesforce endpoints and credentials, the token-response type carrying
//! Salesforce's extra fields, and the transport error mapping shared with the userinfo call.

pub use oauth2;

// crates.io
use oauth2::{
	AuthType, AuthUrl, Client, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
	ExtraTokenFields, HttpClientError, RedirectUrl, StandardRevocableToken, StandardTokenResponse,
	TokenUrl,
	basic::{
		BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
		BasicTokenType,
	},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	provider::SalesforceConfig,
};

/// Token response returned by the Salesforce token endpoint.
pub type SalesforceTokenResponse = StandardTokenResponse<SalesforceTokenFields, BasicTokenType>;

/// `oauth2` client configured with the Salesforce authorization and token endpoints.
pub type SalesforceClient = Client<
	BasicErrorResponse,
	SalesforceTokenResponse,
	BasicTokenIntrospectionResponse,
	StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointSet,
>;

/// Salesforce-specific fields returned next to the standard token response members.
///
/// `scope` and `token_type` are consumed by [`StandardTokenResponse`] itself and therefore do
/// not appear here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesforceTokenFields {
	/// Tenant base URL; the userinfo endpoint lives under it.
	pub instance_url: String,
	/// Identity URL for the authenticated user.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Base64 HMAC-SHA256 signature over `id` and `issued_at`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub signature: Option<String>,
	/// Issue instant as Unix epoch milliseconds, encoded as a string.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub issued_at: Option<String>,
}
impl SalesforceTokenFields {
	/// Creates extras holding only the instance URL.
	pub fn new(instance_url: impl Into<String>) -> Self {
		Self { instance_url: instance_url.into(), id: None, signature: None, issued_at: None }
	}

	/// Parses [`issued_at`](Self::issued_at) into an instant, when present and well formed.
	pub fn issued_at_time(&self) -> Option<OffsetDateTime> {
		let millis = self.issued_at.as_deref()?.trim().parse::<i128>().ok()?;

		OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()
	}
}
impl ExtraTokenFields for SalesforceTokenFields {}

/// Maps HTTP transport failures into adapter [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into an adapter error.
	fn map_transport_error(&self, error: HttpClientError<E>) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, err: HttpClientError<ReqwestError>) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(*inner),
			other => map_common_transport_error(other),
		}
	}
}

/// Maps the transport-agnostic [`HttpClientError`] variants.
///
/// Custom mappers can delegate here for everything except their own transport variant.
pub fn map_common_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		other => TransportError::Other { message: other.to_string() }.into(),
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}

	TransportError::from(err).into()
}

pub(crate) fn build_client(config: &SalesforceConfig) -> Result<SalesforceClient> {
	let auth_url = AuthUrl::new(config.endpoints.authorization.to_string())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "authorization", source })?;
	let token_url = TokenUrl::new(config.endpoints.token.to_string())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "token", source })?;
	let redirect_url = RedirectUrl::new(config.callback_url.to_string())
		.map_err(|source| ConfigError::InvalidRedirect { source })?;

	// Salesforce reads client credentials from the form body.
	Ok(Client::new(ClientId::new(config.client_id.clone()))
		.set_client_secret(ClientSecret::new(config.client_secret.expose().to_owned()))
		.set_auth_uri(auth_url)
		.set_token_uri(token_url)
		.set_redirect_uri(redirect_url)
		.set_auth_type(AuthType::RequestBody))
}
