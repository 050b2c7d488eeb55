//! Salesforce implementation of [`ProviderStrategy`].

// crates.io
use oauth2::{
	AccessToken, AsyncHttpClient, HttpRequest,
	http::{
		Method, Request,
		header::{ACCEPT, AUTHORIZATION},
	},
};
use serde_json::Value;
// self
#[cfg(feature = "reqwest")]
use crate::{
	http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper, provider::SalesforceOptions,
};
use crate::{
	_prelude::*,
	error::{ConfigError, ProfileError},
	http::ProviderHttpClient,
	oauth::{self, SalesforceClient, SalesforceTokenFields, TransportErrorMapper},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::{
		AuthorizationParams, PROVIDER_NAME, ProfileFuture, ProviderStrategy, SalesforceConfig,
		SalesforceProfile, userinfo_url,
	},
};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Strategy type alias for the default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestSalesforceStrategy =
	SalesforceStrategy<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Salesforce provider adapter.
///
/// Holds the immutable configuration plus a shared transport, so one instance serves every
/// concurrent authentication attempt.
pub struct SalesforceStrategy<C, M>
where
	C: ?Sized + ProviderHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	config: SalesforceConfig,
	/// HTTP client wrapper used for the userinfo request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
}
impl<C, M> SalesforceStrategy<C, M>
where
	C: ?Sized + ProviderHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a strategy that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		config: SalesforceConfig,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self { config, http_client: http_client.into(), transport_mapper: mapper.into() }
	}

	/// Resolved configuration.
	pub fn config(&self) -> &SalesforceConfig {
		&self.config
	}

	/// Builds an `oauth2` client wired with the Salesforce endpoints and credentials, for the
	/// OAuth2 core to drive the code exchange.
	pub fn oauth_client(&self) -> Result<SalesforceClient> {
		oauth::build_client(&self.config)
	}

	/// Builds the authorization redirect URL for `state`.
	///
	/// Carries `response_type=code`, `client_id`, `redirect_uri` and `state`, followed by the
	/// parameters produced by [`ProviderStrategy::authorization_params`].
	pub fn authorize_url(&self, state: &str) -> Url {
		let mut params = AuthorizationParams::new();

		params
			.append("response_type", "code")
			.append("client_id", self.config.client_id.as_str())
			.append("redirect_uri", self.config.callback_url.as_str())
			.append("state", state);
		self.authorization_params(&mut params);

		let mut url = self.config.endpoints.authorization.clone();

		params.apply_to(&mut url);

		url
	}

	async fn fetch_profile(
		&self,
		access_token: &AccessToken,
		extras: &SalesforceTokenFields,
		span: &FlowSpan,
	) -> Result<SalesforceProfile> {
		let url = userinfo_url(&extras.instance_url)?;
		let request = userinfo_request(&url, access_token)?;
		let handle = self.http_client.handle();
		let response = handle
			.call(request)
			.await
			.map_err(|err| self.transport_mapper.map_transport_error(err))?;

		span.record_step("userinfo_fetched");

		let status = response.status();

		if !status.is_success() {
			return Err(ProfileError::UnexpectedStatus {
				status: status.as_u16(),
				body_preview: body_preview(response.body()),
			}
			.into());
		}

		let raw: Value = serde_json::from_slice(response.body()).map_err(ProfileError::from)?;
		let profile = SalesforceProfile::from_userinfo(raw);

		span.record_step("profile_normalized");

		Ok(profile)
	}
}
#[cfg(feature = "reqwest")]
impl SalesforceStrategy<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Builds the adapter from caller options with a redirect-free reqwest transport.
	pub fn new(options: SalesforceOptions) -> Result<Self> {
		let config = options.build()?;
		let http_client = ReqwestHttpClient::without_redirects()?;

		Ok(Self::with_http_client(config, http_client, ReqwestTransportErrorMapper))
	}
}
impl<C, M> Debug for SalesforceStrategy<C, M>
where
	C: ?Sized + ProviderHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SalesforceStrategy").field("config", &self.config).finish_non_exhaustive()
	}
}
impl<C, M> ProviderStrategy for SalesforceStrategy<C, M>
where
	C: ?Sized + ProviderHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	type Profile = SalesforceProfile;
	type TokenFields = SalesforceTokenFields;

	fn name(&self) -> &'static str {
		PROVIDER_NAME
	}

	fn authorization_params<'p>(
		&self,
		params: &'p mut AuthorizationParams,
	) -> &'p mut AuthorizationParams {
		const KIND: FlowKind = FlowKind::Authorization;

		let span = FlowSpan::new(KIND, "authorization_params");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);
		span.in_scope(|| {
			params.set("scope", self.config.scope.joined());

			for (key, value) in self.config.extensions.pairs() {
				params.set(key, value);
			}

			span.record_step("params_decorated");
		});
		obs::record_flow_outcome(KIND, FlowOutcome::Success);

		params
	}

	fn user_profile<'a>(
		&'a self,
		access_token: &'a AccessToken,
		extras: &'a Self::TokenFields,
	) -> ProfileFuture<'a, Self::Profile> {
		Box::pin(async move {
			const KIND: FlowKind = FlowKind::UserProfile;

			let span = FlowSpan::new(KIND, "user_profile");

			obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

			let result = span.instrument(self.fetch_profile(access_token, extras, &span)).await;

			obs::record_flow_result(KIND, result)
		})
	}
}

fn userinfo_request(url: &Url, access_token: &AccessToken) -> Result<HttpRequest> {
	let request = Request::builder()
		.method(Method::GET)
		.uri(url.as_str())
		.header(AUTHORIZATION, format!("Bearer {}", access_token.secret()))
		.header(ACCEPT, "application/json")
		.body(Vec::new())
		.map_err(ConfigError::from)?;

	Ok(request)
}

fn body_preview(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);

	if text.chars().count() <= BODY_PREVIEW_LIMIT {
		return text.into_owned();
	}

	let mut buf = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
