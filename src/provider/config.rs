//! Adapter configuration: fixed Salesforce endpoints plus the caller-supplied options,
//! resolved once into an immutable [`SalesforceConfig`].

/// Optional authorization extension parameters.
pub mod extensions;
/// Caller-facing options and their builder.
pub mod options;

pub use extensions::*;
pub use options::*;

// self
use crate::{
	_prelude::*,
	auth::{ScopeSet, Secret},
	error::ConfigError,
};

/// Provider tag stamped on every normalized profile.
pub const PROVIDER_NAME: &str = "salesforce";
/// Production authorization endpoint.
pub const AUTHORIZATION_URL: &str = "https://login.salesforce.com/services/oauth2/authorize";
/// Production token endpoint.
pub const TOKEN_URL: &str = "https://login.salesforce.com/services/oauth2/token";
/// Userinfo path appended to the tenant `instance_url`.
pub const USERINFO_PATH: &str = "/services/oauth2/userinfo";

/// Endpoint set used by the adapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderEndpoints {
	/// Authorization endpoint the user agent is redirected to.
	pub authorization: Url,
	/// Token endpoint used by the OAuth2 core for the code exchange.
	pub token: Url,
}
impl ProviderEndpoints {
	/// Parses the fixed production endpoints.
	pub fn salesforce() -> Result<Self, ConfigError> {
		Ok(Self {
			authorization: parse_endpoint("authorization", AUTHORIZATION_URL)?,
			token: parse_endpoint("token", TOKEN_URL)?,
		})
	}
}

/// Immutable adapter configuration built by [`SalesforceOptions::build`].
#[derive(Clone, Debug)]
pub struct SalesforceConfig {
	/// Connected app consumer key.
	pub client_id: String,
	/// Connected app consumer secret.
	pub client_secret: Secret,
	/// Redirect URI registered on the connected app.
	pub callback_url: Url,
	/// Fixed provider endpoints.
	pub endpoints: ProviderEndpoints,
	/// Resolved scope list.
	pub scope: ScopeSet,
	/// Optional extension parameters.
	pub extensions: AuthorizationExtensions,
}

/// Builds the userinfo URL for a tenant.
///
/// The path is appended to `instance_url` verbatim (minus trailing slashes) so community or
/// experience-cloud base paths are kept.
pub fn userinfo_url(instance_url: &str) -> Result<Url, ConfigError> {
	let base = instance_url.trim_end_matches('/');

	Url::parse(&format!("{base}{USERINFO_PATH}")).map_err(|source| {
		ConfigError::InvalidInstanceUrl { instance_url: instance_url.to_owned(), source }
	})
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn fixed_endpoints_parse() {
		let endpoints = ProviderEndpoints::salesforce().expect("Fixed endpoints should parse.");

		assert_eq!(endpoints.authorization.as_str(), AUTHORIZATION_URL);
		assert_eq!(endpoints.token.as_str(), TOKEN_URL);
		assert_eq!(endpoints.authorization.scheme(), "https");
	}

	#[test]
	fn userinfo_url_keeps_tenant_paths() {
		assert_eq!(
			userinfo_url("https://acme.my.salesforce.com")
				.expect("Instance URL should parse.")
				.as_str(),
			"https://acme.my.salesforce.com/services/oauth2/userinfo"
		);
		assert_eq!(
			userinfo_url("https://acme.my.site.com/partners/")
				.expect("Instance URL with a path should parse.")
				.as_str(),
			"https://acme.my.site.com/partners/services/oauth2/userinfo"
		);
	}

	#[test]
	fn userinfo_url_rejects_relative_instances() {
		let err = userinfo_url("not a url").expect_err("Relative instance URLs must fail.");

		assert!(matches!(err, ConfigError::InvalidInstanceUrl { .. }));
	}

	#[test]
	fn config_debug_redacts_secret() {
		let config = SalesforceOptions::new(
			"id",
			"top-secret",
			Url::parse("https://app.example.com/cb").expect("Callback fixture should parse."),
		)
		.build()
		.expect("Options should build successfully.");

		assert!(!format!("{config:?}").contains("top-secret"));
	}
}
