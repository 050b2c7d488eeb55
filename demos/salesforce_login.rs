//! Builds the Salesforce adapter, prints the authorization redirect, and shows how the OAuth2
//! core picks up the pre-wired `oauth2` client for the code exchange.

// std
use std::env;
// crates.io
use color_eyre::Result;
use rand::{Rng, distr::Alphanumeric};
use url::Url;
// self
use oauth2_salesforce::{
	auth::{PkcePair, SalesforceScope},
	provider::{DisplayMode, Prompt, ReqwestSalesforceStrategy, SalesforceOptions},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let client_id =
		env::var("SALESFORCE_CLIENT_ID").unwrap_or_else(|_| "demo-consumer-key".into());
	let client_secret =
		env::var("SALESFORCE_CLIENT_SECRET").unwrap_or_else(|_| "demo-consumer-secret".into());
	let pkce = PkcePair::generate();
	let options = SalesforceOptions::new(
		client_id,
		client_secret,
		Url::parse("https://app.example.com/auth/salesforce/callback")?,
	)
	.scope([SalesforceScope::Api, SalesforceScope::RefreshToken, SalesforceScope::Openid])
	.code_challenge(pkce.challenge.clone())
	.display(DisplayMode::Page)
	.prompt(Prompt::Login);
	let strategy = ReqwestSalesforceStrategy::new(options)?;
	let state: String = rand::rng().sample_iter(Alphanumeric).take(32).map(char::from).collect();

	println!("Send your user to {}.", strategy.authorize_url(&state));
	println!("PKCE challenge sent with the redirect: {}.", pkce.challenge);

	let client = strategy.oauth_client()?;

	println!("The OAuth2 core exchanges the code at {}.", client.token_uri().as_str());
	println!(
		"After the exchange, call `user_profile` with the access token and the `instance_url` extra."
	);

	Ok(())
}
