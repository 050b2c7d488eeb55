// self
use crate::{
	_prelude::*,
	auth::{ScopeInput, Secret},
	error::ConfigError,
	provider::{AuthorizationExtensions, DisplayMode, Prompt, ProviderEndpoints, SalesforceConfig},
};

/// Caller-supplied options for [`SalesforceConfig`].
///
/// Options are not validated; malformed values surface later as provider-side rejections.
/// The struct deserializes from host configuration files, with every extension field
/// optional.
#[derive(Clone, Debug, Deserialize)]
pub struct SalesforceOptions {
	/// Connected app consumer key.
	pub client_id: String,
	/// Connected app consumer secret.
	pub client_secret: Secret,
	/// Redirect URI registered on the connected app.
	pub callback_url: Url,
	/// Requested scopes; [`crate::auth::DEFAULT_SCOPES`] apply when absent.
	#[serde(default)]
	pub scope: Option<ScopeInput>,
	/// Optional extension parameters.
	#[serde(flatten)]
	pub extensions: AuthorizationExtensions,
}
impl SalesforceOptions {
	/// Creates options holding only the required fields.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		callback_url: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			callback_url,
			scope: None,
			extensions: AuthorizationExtensions::default(),
		}
	}

	/// Sets the requested scopes, as a list or a space-joined string.
	pub fn scope(mut self, scope: impl Into<ScopeInput>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Sets the SSO auth provider hint.
	pub fn sso_provider(mut self, provider: impl Into<String>) -> Self {
		self.extensions.sso_provider = Some(provider.into());

		self
	}

	/// Sets the `immediate` flag.
	pub fn immediate(mut self, immediate: bool) -> Self {
		self.extensions.immediate = Some(immediate);

		self
	}

	/// Sets the PKCE code challenge.
	pub fn code_challenge(mut self, challenge: impl Into<String>) -> Self {
		self.extensions.code_challenge = Some(challenge.into());

		self
	}

	/// Sets the login page layout.
	pub fn display(mut self, display: DisplayMode) -> Self {
		self.extensions.display = Some(display);

		self
	}

	/// Prefills the username on the login page.
	pub fn login_hint(mut self, hint: impl Into<String>) -> Self {
		self.extensions.login_hint = Some(hint.into());

		self
	}

	/// Sets the nonce echoed back in the ID token.
	pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
		self.extensions.nonce = Some(nonce.into());

		self
	}

	/// Sets the re-authentication behavior.
	pub fn prompt(mut self, prompt: Prompt) -> Self {
		self.extensions.prompt = Some(prompt);

		self
	}

	/// Resolves scopes and endpoints into an immutable [`SalesforceConfig`].
	pub fn build(self) -> Result<SalesforceConfig, ConfigError> {
		let endpoints = ProviderEndpoints::salesforce()?;
		let scope = self.scope.map(ScopeInput::resolve).unwrap_or_default();

		Ok(SalesforceConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			callback_url: self.callback_url,
			endpoints,
			scope,
			extensions: self.extensions,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn callback() -> Url {
		Url::parse("https://app.example.com/callback").expect("Callback fixture should parse.")
	}

	#[test]
	fn build_applies_default_scope() {
		let config = SalesforceOptions::new("id", "secret", callback())
			.build()
			.expect("Options should build successfully.");

		assert_eq!(config.scope.joined(), "full refresh_token");
		assert_eq!(config.extensions, AuthorizationExtensions::default());
	}

	#[test]
	fn builder_methods_fill_extensions() {
		let config = SalesforceOptions::new("id", "secret", callback())
			.scope("api id")
			.sso_provider("okta")
			.immediate(true)
			.code_challenge("challenge")
			.display(DisplayMode::Mobile)
			.login_hint("user@example.com")
			.nonce("nonce")
			.prompt(Prompt::Consent)
			.build()
			.expect("Options should build successfully.");

		assert_eq!(config.scope.as_slice(), ["api", "id"]);
		assert_eq!(config.extensions.sso_provider.as_deref(), Some("okta"));
		assert_eq!(config.extensions.immediate, Some(true));
		assert_eq!(config.extensions.display, Some(DisplayMode::Mobile));
		assert_eq!(config.extensions.prompt, Some(Prompt::Consent));
	}

	#[test]
	fn options_deserialize_from_config_files() {
		let options: SalesforceOptions = serde_json::from_str(
			r#"{
				"client_id": "id",
				"client_secret": "secret",
				"callback_url": "https://app.example.com/callback",
				"scope": ["api", "refresh_token"],
				"display": "popup",
				"immediate": false
			}"#,
		)
		.expect("Options should deserialize successfully.");
		let config = options.build().expect("Deserialized options should build.");

		assert_eq!(config.scope.joined(), "api refresh_token");
		assert_eq!(config.extensions.display, Some(DisplayMode::Popup));
		assert_eq!(config.extensions.immediate, Some(false));
		assert_eq!(config.client_secret.expose(), "secret");
	}

	#[test]
	fn string_scope_deserializes_as_joined_input() {
		let options: SalesforceOptions = serde_json::from_str(
			r#"{
				"client_id": "id",
				"client_secret": "secret",
				"callback_url": "https://app.example.com/callback",
				"scope": "openid profile"
			}"#,
		)
		.expect("Options should deserialize successfully.");

		assert_eq!(options.scope, Some(ScopeInput::Joined("openid profile".into())));
	}
}
