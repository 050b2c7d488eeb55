//! Salesforce OAuth 2.0 provider adapter: typed authorization parameters, scope resolution, and
//! normalized userinfo profiles for any authorization-code core built on the `oauth2` crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod provider;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		http::ReqwestHttpClient,
		oauth::{ReqwestTransportErrorMapper, SalesforceTokenFields},
		provider::{ReqwestSalesforceStrategy, SalesforceOptions},
	};

	/// Client identifier shared by integration tests.
	pub const TEST_CLIENT_ID: &str = "3MVG9-test-consumer-key";
	/// Client secret shared by integration tests.
	pub const TEST_CLIENT_SECRET: &str = "test-consumer-secret";
	/// Callback URL shared by integration tests.
	pub const TEST_CALLBACK_URL: &str = "https://app.example.com/auth/salesforce/callback";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Options populated with the shared test credentials.
	pub fn test_options() -> SalesforceOptions {
		SalesforceOptions::new(
			TEST_CLIENT_ID,
			TEST_CLIENT_SECRET,
			Url::parse(TEST_CALLBACK_URL).expect("Test callback URL should parse successfully."),
		)
	}

	/// Constructs a [`ReqwestSalesforceStrategy`] over the insecure test transport.
	pub fn build_reqwest_test_strategy(options: SalesforceOptions) -> ReqwestSalesforceStrategy {
		let config = options.build().expect("Test options should build successfully.");

		ReqwestSalesforceStrategy::with_http_client(
			config,
			test_reqwest_http_client(),
			ReqwestTransportErrorMapper,
		)
	}

	/// Token extras pointing the userinfo lookup at `instance_url`.
	pub fn test_token_fields(instance_url: impl Into<String>) -> SalesforceTokenFields {
		SalesforceTokenFields::new(instance_url)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
