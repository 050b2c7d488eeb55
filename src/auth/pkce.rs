//! PKCE helpers for populating the `code_challenge` authorization parameter.
//!
//! Salesforce expects an S256 challenge: the base64url (no padding) SHA-256 digest of the
//! verifier. The verifier itself stays with the caller and is sent during the code exchange.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, auth::Secret};

const PKCE_VERIFIER_LEN: usize = 64;

/// Verifier/challenge pair for the authorization code + PKCE handshake.
#[derive(Clone)]
pub struct PkcePair {
	/// Secret verifier that must be replayed during the code exchange.
	pub verifier: Secret,
	/// S256 challenge derived from [`verifier`](Self::verifier).
	pub challenge: String,
}
impl PkcePair {
	/// Generates a random 64-character verifier and its challenge.
	pub fn generate() -> Self {
		let verifier: String =
			rand::rng().sample_iter(Alphanumeric).take(PKCE_VERIFIER_LEN).map(char::from).collect();

		Self::from_verifier(verifier)
	}

	/// Derives the challenge for an existing verifier.
	pub fn from_verifier(verifier: impl Into<String>) -> Self {
		let verifier = Secret::new(verifier);
		let challenge = code_challenge(verifier.expose());

		Self { verifier, challenge }
	}
}
impl Debug for PkcePair {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PkcePair")
			.field("verifier", &self.verifier)
			.field("challenge", &self.challenge)
			.finish()
	}
}

/// Computes the S256 challenge for `verifier`.
pub fn code_challenge(verifier: &str) -> String {
	let mut hasher = Sha256::new();

	hasher.update(verifier.as_bytes());

	let digest = hasher.finalize();

	URL_SAFE_NO_PAD.encode(digest)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn challenge_matches_rfc7636_vector() {
		let pair = PkcePair::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");

		assert_eq!(pair.challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
	}

	#[test]
	fn generated_pairs_are_consistent() {
		let pair = PkcePair::generate();

		assert_eq!(pair.verifier.expose().len(), PKCE_VERIFIER_LEN);
		assert_eq!(pair.challenge, code_challenge(pair.verifier.expose()));
		assert!(!format!("{pair:?}").contains(pair.verifier.expose()));
	}
}
