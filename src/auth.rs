//! Auth-domain primitives: scopes, redacted secrets, and PKCE helpers.

pub mod pkce;
pub mod scope;
pub mod secret;

pub use pkce::*;
pub use scope::*;
pub use secret::*;
