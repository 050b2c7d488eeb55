#![cfg(all(feature = "reqwest", feature = "test"))]

// self
use oauth2_salesforce::{
	_preludet::*,
	auth::{SalesforceScope, ScopeInput},
	provider::{
		AUTHORIZATION_URL, AuthorizationParams, DisplayMode, Prompt, ProviderStrategy,
		SalesforceOptions,
	},
};

fn decorate(options: SalesforceOptions) -> AuthorizationParams {
	let strategy = build_reqwest_test_strategy(options);
	let mut params = AuthorizationParams::new();

	strategy.authorization_params(&mut params);

	params
}

#[test]
fn strategy_is_named_salesforce() {
	let strategy = build_reqwest_test_strategy(test_options());

	assert_eq!(strategy.name(), "salesforce");
}

#[test]
fn default_scope_is_full_refresh_token() {
	let params = decorate(test_options());

	assert_eq!(params.get("scope"), Some("full refresh_token"));
	assert_eq!(params.len(), 1);
}

#[test]
fn scope_can_be_changed() {
	let params = decorate(test_options().scope("profile"));

	assert_eq!(params.get("scope"), Some("profile"));
}

#[test]
fn scope_list_keeps_order_and_duplicates() {
	let params = decorate(test_options().scope(vec![
		"api".to_owned(),
		"id".to_owned(),
		"api".to_owned(),
	]));

	assert_eq!(params.get("scope"), Some("api id api"));
}

#[test]
fn typed_scopes_serialize_to_wire_names() {
	let params = decorate(test_options().scope([
		SalesforceScope::Api,
		SalesforceScope::Openid,
		SalesforceScope::Visualforce,
	]));

	assert_eq!(params.get("scope"), Some("api openid visualforce"));
}

#[test]
fn empty_scope_list_falls_back_to_default() {
	let params = decorate(test_options().scope(ScopeInput::List(Vec::new())));

	assert_eq!(params.get("scope"), Some("full refresh_token"));
}

#[test]
fn empty_joined_scope_stays_empty() {
	let params = decorate(test_options().scope(""));

	assert_eq!(params.get("scope"), Some(""));
}

#[test]
fn decoration_replaces_existing_scope() {
	let strategy = build_reqwest_test_strategy(test_options().scope("api"));
	let mut params = AuthorizationParams::from_query("scope=a&state=s&scope=b");

	strategy.authorization_params(&mut params);

	assert_eq!(params.get_all("scope").collect::<Vec<_>>(), vec!["api"]);
	assert_eq!(params.get("state"), Some("s"));
}

#[test]
fn sso_provider_is_forwarded() {
	let params = decorate(test_options().sso_provider("SOME_PROVIDER"));

	assert_eq!(params.get("sso_provider"), Some("SOME_PROVIDER"));
}

#[test]
fn immediate_true_is_forwarded_as_string() {
	let params = decorate(test_options().immediate(true));

	assert_eq!(params.get("immediate"), Some("true"));
}

#[test]
fn immediate_false_is_omitted() {
	let params = decorate(test_options().immediate(false));

	assert!(!params.contains("immediate"));
}

#[test]
fn code_challenge_is_forwarded() {
	let params = decorate(test_options().code_challenge("CODE_CHALLENGE"));

	assert_eq!(params.get("code_challenge"), Some("CODE_CHALLENGE"));
}

#[test]
fn display_is_forwarded() {
	let params = decorate(test_options().display(DisplayMode::Popup));

	assert_eq!(params.get("display"), Some("popup"));
}

#[test]
fn login_hint_is_forwarded() {
	let params = decorate(test_options().login_hint("user@example.com"));

	assert_eq!(params.get("login_hint"), Some("user@example.com"));
}

#[test]
fn empty_login_hint_is_omitted() {
	let params = decorate(test_options().login_hint(""));

	assert!(!params.contains("login_hint"));
}

#[test]
fn nonce_is_forwarded() {
	let params = decorate(test_options().nonce("NONCE"));

	assert_eq!(params.get("nonce"), Some("NONCE"));
}

#[test]
fn prompt_is_forwarded() {
	let params = decorate(test_options().prompt(Prompt::Consent));

	assert_eq!(params.get("prompt"), Some("consent"));
}

#[test]
fn unset_extensions_never_appear() {
	let params = decorate(test_options());

	for key in
		["sso_provider", "immediate", "code_challenge", "display", "login_hint", "nonce", "prompt"]
	{
		assert!(!params.contains(key), "Unexpected `{key}` parameter.");
	}
}

#[test]
fn authorize_url_carries_every_parameter() {
	let strategy = build_reqwest_test_strategy(
		test_options().scope("api refresh_token").prompt(Prompt::Login).nonce("n-1"),
	);
	let url = strategy.authorize_url("state-123");
	let params =
		AuthorizationParams::from_query(url.query().expect("Authorize URL should carry a query."));

	assert!(url.as_str().starts_with(AUTHORIZATION_URL));
	assert_eq!(params.get("response_type"), Some("code"));
	assert_eq!(params.get("client_id"), Some(TEST_CLIENT_ID));
	assert_eq!(params.get("redirect_uri"), Some(TEST_CALLBACK_URL));
	assert_eq!(params.get("state"), Some("state-123"));
	assert_eq!(params.get("scope"), Some("api refresh_token"));
	assert_eq!(params.get("prompt"), Some("login"));
	assert_eq!(params.get("nonce"), Some("n-1"));
}

#[test]
fn oauth_client_uses_fixed_endpoints() {
	let strategy = build_reqwest_test_strategy(test_options());
	let client = strategy.oauth_client().expect("OAuth client should build successfully.");

	assert_eq!(client.client_id().as_str(), TEST_CLIENT_ID);
	assert_eq!(client.auth_uri().as_str(), AUTHORIZATION_URL);
	assert_eq!(
		client.redirect_uri().map(|uri| uri.as_str().to_owned()),
		Some(TEST_CALLBACK_URL.to_owned())
	);
}
