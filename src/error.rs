//! Adapter-level error types shared across configuration, transport, and profile resolution.

// self
use crate::_prelude::*;

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical adapter error exposed by public APIs.
///
/// Every failure is scoped to a single authentication attempt; the OAuth2 core is expected
/// to convert it into an authentication failure.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Userinfo endpoint answered with something that is not a usable profile.
	#[error(transparent)]
	Profile(#[from] ProfileError),
}

/// Configuration failures raised while wiring the adapter.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// One of the fixed provider endpoints failed to parse.
	#[error("Provider endpoint `{endpoint}` is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Callback URL cannot be used as an OAuth redirect URI.
	#[error("Callback URL is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token response carried an `instance_url` that cannot host the userinfo endpoint.
	#[error("Instance URL `{instance_url}` is invalid.")]
	InvalidInstanceUrl {
		/// Raw value returned by the token endpoint.
		instance_url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the userinfo endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request timed out before the userinfo endpoint answered.
	#[error("Request timed out while calling the userinfo endpoint.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the userinfo endpoint.")]
	Io(#[from] std::io::Error),
	/// Transport failed without a structured error.
	#[error("HTTP client error occurred while calling the userinfo endpoint: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}

/// Failures while turning a userinfo response into a profile.
#[derive(Debug, ThisError)]
pub enum ProfileError {
	/// Userinfo endpoint returned a non-success status.
	#[error("Userinfo endpoint returned HTTP {status}.")]
	UnexpectedStatus {
		/// HTTP status code.
		status: u16,
		/// Truncated response body, for diagnostics.
		body_preview: String,
	},
	/// Response body is not valid JSON.
	#[error("Userinfo endpoint returned malformed JSON.")]
	Malformed(#[from] serde_json::Error),
}
