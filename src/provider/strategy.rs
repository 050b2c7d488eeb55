//! Provider strategy hooks called by the OAuth2 core.
//!
//! The core owns the protocol state machine; strategies only decorate outgoing authorization
//! parameters and resolve a profile once the code exchange has produced an access token.

// crates.io
use oauth2::{AccessToken, ExtraTokenFields};
// self
use crate::{_prelude::*, provider::AuthorizationParams};

/// Boxed future returned by [`ProviderStrategy::user_profile`].
pub type ProfileFuture<'a, P> = Pin<Box<dyn Future<Output = Result<P>> + 'a + Send>>;

/// Strategy hook that lets a provider customize an authorization-code flow.
///
/// Implementors are required to be `Send + Sync` so a single instance can serve concurrent
/// authentication attempts.
pub trait ProviderStrategy: Send + Sync {
	/// Extra fields the provider returns next to the standard token response members.
	type TokenFields: ExtraTokenFields;
	/// Normalized profile produced by [`user_profile`](Self::user_profile).
	type Profile: Send;

	/// Stable provider tag.
	fn name(&self) -> &'static str;

	/// Decorates outgoing authorization-request parameters and returns the same collection.
	///
	/// Must not perform I/O.
	fn authorization_params<'p>(
		&self,
		params: &'p mut AuthorizationParams,
	) -> &'p mut AuthorizationParams;

	/// Resolves the profile for an access token obtained from the code exchange.
	fn user_profile<'a>(
		&'a self,
		access_token: &'a AccessToken,
		extras: &'a Self::TokenFields,
	) -> ProfileFuture<'a, Self::Profile>;
}
