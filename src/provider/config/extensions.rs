// self
use crate::_prelude::*;

/// Salesforce login page layout requested via the `display` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
	/// Full-page authorization screen.
	Page,
	/// Compact dialog sized for a popup window.
	Popup,
	/// Mobile-optimized dialog for touch screens.
	Touch,
	/// Mobile-optimized dialog for devices without touch support.
	Mobile,
}
impl DisplayMode {
	/// Returns the wire value for the `display` parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			DisplayMode::Page => "page",
			DisplayMode::Popup => "popup",
			DisplayMode::Touch => "touch",
			DisplayMode::Mobile => "mobile",
		}
	}
}
impl Display for DisplayMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Re-authentication behavior requested via the `prompt` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
	/// Force the user to log in again.
	Login,
	/// Force the approval screen even if the app was approved before.
	Consent,
	/// Show the account chooser.
	SelectAccount,
}
impl Prompt {
	/// Returns the wire value for the `prompt` parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			Prompt::Login => "login",
			Prompt::Consent => "consent",
			Prompt::SelectAccount => "select_account",
		}
	}
}
impl Display for Prompt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Optional Salesforce extension parameters attached to every authorization request.
///
/// A value only reaches the wire when it is truthy: `immediate: Some(false)` and empty strings
/// behave exactly like `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationExtensions {
	/// Auth provider developer name used for single sign-on hand-off.
	pub sso_provider: Option<String>,
	/// Fail instead of prompting when the user is not already logged in and approved.
	pub immediate: Option<bool>,
	/// PKCE S256 challenge.
	pub code_challenge: Option<String>,
	/// Login page layout.
	pub display: Option<DisplayMode>,
	/// Username prefilled on the login page.
	pub login_hint: Option<String>,
	/// Value echoed back in the ID token.
	pub nonce: Option<String>,
	/// Re-authentication behavior.
	pub prompt: Option<Prompt>,
}
impl AuthorizationExtensions {
	/// Returns the `(key, value)` pairs that should be present on the wire, in a fixed order.
	pub fn pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();

		push_text(&mut pairs, "sso_provider", self.sso_provider.as_deref());

		if let Some(true) = self.immediate {
			pairs.push(("immediate", true.to_string()));
		}

		push_text(&mut pairs, "code_challenge", self.code_challenge.as_deref());

		if let Some(display) = self.display {
			pairs.push(("display", display.as_str().into()));
		}

		push_text(&mut pairs, "login_hint", self.login_hint.as_deref());
		push_text(&mut pairs, "nonce", self.nonce.as_deref());

		if let Some(prompt) = self.prompt {
			pairs.push(("prompt", prompt.as_str().into()));
		}

		pairs
	}
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
	if let Some(value) = value.filter(|value| !value.is_empty()) {
		pairs.push((key, value.to_owned()));
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn empty_extensions_emit_nothing() {
		assert!(AuthorizationExtensions::default().pairs().is_empty());
	}

	#[test]
	fn falsy_values_are_omitted() {
		let extensions = AuthorizationExtensions {
			immediate: Some(false),
			login_hint: Some(String::new()),
			nonce: Some("n-1".into()),
			..Default::default()
		};

		assert_eq!(extensions.pairs(), vec![("nonce", "n-1".to_owned())]);
	}

	#[test]
	fn every_value_serializes_in_order() {
		let extensions = AuthorizationExtensions {
			sso_provider: Some("okta".into()),
			immediate: Some(true),
			code_challenge: Some("challenge".into()),
			display: Some(DisplayMode::Touch),
			login_hint: Some("user@example.com".into()),
			nonce: Some("nonce".into()),
			prompt: Some(Prompt::SelectAccount),
		};
		let keys = extensions.pairs().into_iter().map(|(key, _)| key).collect::<Vec<_>>();

		assert_eq!(
			keys,
			["sso_provider", "immediate", "code_challenge", "display", "login_hint", "nonce", "prompt"]
		);
		assert_eq!(extensions.pairs()[1].1, "true");
		assert_eq!(extensions.pairs()[6].1, "select_account");
	}

	#[test]
	fn enums_use_wire_names_in_serde() {
		let display: DisplayMode =
			serde_json::from_str("\"popup\"").expect("Display mode should deserialize.");
		let prompt: Prompt =
			serde_json::from_str("\"select_account\"").expect("Prompt should deserialize.");

		assert_eq!(display, DisplayMode::Popup);
		assert_eq!(prompt.to_string(), "select_account");
	}
}
