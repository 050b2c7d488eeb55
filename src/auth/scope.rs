//! Scope modeling: the Salesforce scope vocabulary, caller-facing scope input, and the
//! resolved scope list sent on every authorization request.

// std
use std::slice::Iter;
// crates.io
use serde::{Deserializer, Serializer, ser::SerializeSeq};
// self
use crate::_prelude::*;

/// Separator used for the wire form of a scope list.
pub const SCOPE_SEPARATOR: char = ' ';
/// Scopes requested when the caller does not supply any.
pub const DEFAULT_SCOPES: [SalesforceScope; 2] =
	[SalesforceScope::Full, SalesforceScope::RefreshToken];

/// Scope tokens documented by Salesforce for connected apps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum SalesforceScope {
	CdpQueryApi,
	PardotApi,
	CdpProfileApi,
	ChatterApi,
	CdpIngestApi,
	EclairApi,
	WaveApi,
	Api,
	CustomPermissions,
	Id,
	Profile,
	Email,
	Address,
	Phone,
	Lightning,
	Content,
	Openid,
	Full,
	RefreshToken,
	OfflineAccess,
	Visualforce,
	ChatbotApi,
	UserRegistrationApi,
	ForgotPassword,
	CdpApi,
	SfapApi,
	InteractionApi,
}
impl SalesforceScope {
	/// Every known scope, in declaration order.
	pub const ALL: [SalesforceScope; 27] = [
		Self::CdpQueryApi,
		Self::PardotApi,
		Self::CdpProfileApi,
		Self::ChatterApi,
		Self::CdpIngestApi,
		Self::EclairApi,
		Self::WaveApi,
		Self::Api,
		Self::CustomPermissions,
		Self::Id,
		Self::Profile,
		Self::Email,
		Self::Address,
		Self::Phone,
		Self::Lightning,
		Self::Content,
		Self::Openid,
		Self::Full,
		Self::RefreshToken,
		Self::OfflineAccess,
		Self::Visualforce,
		Self::ChatbotApi,
		Self::UserRegistrationApi,
		Self::ForgotPassword,
		Self::CdpApi,
		Self::SfapApi,
		Self::InteractionApi,
	];

	/// Returns the wire token for the scope.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::CdpQueryApi => "cdp_query_api",
			Self::PardotApi => "pardot_api",
			Self::CdpProfileApi => "cdp_profile_api",
			Self::ChatterApi => "chatter_api",
			Self::CdpIngestApi => "cdp_ingest_api",
			Self::EclairApi => "eclair_api",
			Self::WaveApi => "wave_api",
			Self::Api => "api",
			Self::CustomPermissions => "custom_permissions",
			Self::Id => "id",
			Self::Profile => "profile",
			Self::Email => "email",
			Self::Address => "address",
			Self::Phone => "phone",
			Self::Lightning => "lightning",
			Self::Content => "content",
			Self::Openid => "openid",
			Self::Full => "full",
			Self::RefreshToken => "refresh_token",
			Self::OfflineAccess => "offline_access",
			Self::Visualforce => "visualforce",
			Self::ChatbotApi => "chatbot_api",
			Self::UserRegistrationApi => "user_registration_api",
			Self::ForgotPassword => "forgot_password",
			Self::CdpApi => "cdp_api",
			Self::SfapApi => "sfap_api",
			Self::InteractionApi => "interaction_api",
		}
	}
}
impl Display for SalesforceScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SalesforceScope {
	type Err = UnknownScope;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|scope| scope.as_str() == s)
			.ok_or_else(|| UnknownScope { scope: s.to_owned() })
	}
}

/// Error returned when a token is not part of [`SalesforceScope`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Scope `{scope}` is not a known Salesforce scope.")]
pub struct UnknownScope {
	/// The unrecognized token.
	pub scope: String,
}

/// Scope value as supplied by the caller.
///
/// Callers either pass a list of tokens or a pre-joined, space-separated string. Both
/// forms resolve to a [`ScopeSet`] once, when the adapter is configured.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScopeInput {
	/// Individual scope tokens, used as-is.
	List(Vec<String>),
	/// Space-joined scope tokens, split on [`SCOPE_SEPARATOR`].
	Joined(String),
}
impl ScopeInput {
	/// Resolves the input into the scope list sent on the wire.
	///
	/// An empty list counts as "no scopes supplied" and yields [`DEFAULT_SCOPES`]. An empty
	/// string does not: it splits into a single empty token.
	pub fn resolve(self) -> ScopeSet {
		match self {
			Self::List(tokens) if tokens.is_empty() => ScopeSet::default(),
			Self::List(tokens) => ScopeSet::from_tokens(tokens),
			Self::Joined(joined) => ScopeSet::from_tokens(joined.split(SCOPE_SEPARATOR)),
		}
	}
}
impl From<&str> for ScopeInput {
	fn from(value: &str) -> Self {
		Self::Joined(value.to_owned())
	}
}
impl From<String> for ScopeInput {
	fn from(value: String) -> Self {
		Self::Joined(value)
	}
}
impl From<Vec<String>> for ScopeInput {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}
impl From<Vec<SalesforceScope>> for ScopeInput {
	fn from(value: Vec<SalesforceScope>) -> Self {
		Self::List(value.into_iter().map(|scope| scope.as_str().to_owned()).collect())
	}
}
impl<const N: usize> From<[SalesforceScope; N]> for ScopeInput {
	fn from(value: [SalesforceScope; N]) -> Self {
		Self::List(value.iter().map(|scope| scope.as_str().to_owned()).collect())
	}
}

/// Resolved, ordered scope list.
///
/// Caller order is preserved and duplicates are kept; tokens outside [`SalesforceScope`]
/// pass through untouched so newly introduced provider scopes keep working.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ScopeSet {
	scopes: Arc<[String]>,
}
impl ScopeSet {
	/// Builds a scope list from raw tokens without validation.
	pub fn from_tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { scopes: tokens.into_iter().map(Into::into).collect() }
	}

	/// Number of tokens, duplicates included.
	pub fn len(&self) -> usize {
		self.scopes.len()
	}

	/// Returns true if no tokens are present.
	pub fn is_empty(&self) -> bool {
		self.scopes.is_empty()
	}

	/// Returns true if the list contains the provided token.
	pub fn contains(&self, scope: &str) -> bool {
		self.scopes.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over the tokens in caller order.
	pub fn iter(&self) -> ScopeIter<'_> {
		ScopeIter { inner: self.scopes.iter() }
	}

	/// Tokens that are not part of [`SalesforceScope`].
	pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
		self.iter().filter(|scope| scope.parse::<SalesforceScope>().is_err())
	}

	/// Wire form: tokens joined with [`SCOPE_SEPARATOR`].
	pub fn joined(&self) -> String {
		let mut buf = String::new();

		for (idx, scope) in self.scopes.iter().enumerate() {
			if idx > 0 {
				buf.push(SCOPE_SEPARATOR);
			}

			buf.push_str(scope);
		}

		buf
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.scopes
	}
}
impl Default for ScopeSet {
	fn default() -> Self {
		Self::from_tokens(DEFAULT_SCOPES.iter().map(|scope| scope.as_str()))
	}
}
impl Debug for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeSet").field(&self.scopes).finish()
	}
}
impl Display for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}
impl From<ScopeInput> for ScopeSet {
	fn from(value: ScopeInput) -> Self {
		value.resolve()
	}
}
impl FromStr for ScopeSet {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(ScopeInput::from(s).resolve())
	}
}

/// Iterator over scope strings.
pub struct ScopeIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for ScopeIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|s| s.as_str())
	}
}
impl<'a> IntoIterator for &'a ScopeSet {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
impl Serialize for ScopeSet {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.scopes.len()))?;

		for scope in self.scopes.iter() {
			seq.serialize_element(scope)?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for ScopeSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		ScopeInput::deserialize(deserializer).map(ScopeInput::resolve)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn missing_scopes_fall_back_to_defaults() {
		let scopes = ScopeInput::List(Vec::new()).resolve();

		assert_eq!(scopes.joined(), "full refresh_token");
		assert_eq!(ScopeSet::default(), scopes);
	}

	#[test]
	fn joined_input_splits_on_single_space() {
		let scopes = ScopeInput::from("api  id").resolve();

		assert_eq!(scopes.as_slice(), ["api", "", "id"]);
		assert_eq!(scopes.joined(), "api  id");
	}

	#[test]
	fn empty_string_keeps_single_empty_token() {
		let scopes = ScopeInput::from("").resolve();

		assert_eq!(scopes.len(), 1);
		assert_eq!(scopes.joined(), "");
	}

	#[test]
	fn list_input_preserves_order_and_duplicates() {
		let scopes =
			ScopeInput::from(vec!["openid".to_owned(), "api".to_owned(), "api".to_owned()])
				.resolve();

		assert_eq!(scopes.iter().collect::<Vec<_>>(), vec!["openid", "api", "api"]);
		assert!(scopes.contains("openid"));
	}

	#[test]
	fn unknown_tokens_pass_through() {
		let scopes = ScopeInput::from("api future_scope").resolve();

		assert_eq!(scopes.joined(), "api future_scope");
		assert_eq!(scopes.unrecognized().collect::<Vec<_>>(), vec!["future_scope"]);
	}

	#[test]
	fn typed_scopes_render_wire_tokens() {
		let scopes =
			ScopeInput::from([SalesforceScope::Openid, SalesforceScope::CdpQueryApi]).resolve();

		assert_eq!(scopes.to_string(), "openid cdp_query_api");
		assert_eq!("refresh_token".parse::<SalesforceScope>(), Ok(SalesforceScope::RefreshToken));
		assert!("nope".parse::<SalesforceScope>().is_err());
	}

	#[test]
	fn scope_enum_matches_serde_names() {
		for scope in SalesforceScope::ALL {
			let encoded =
				serde_json::to_string(&scope).expect("Scope should serialize successfully.");

			assert_eq!(encoded, format!("\"{}\"", scope.as_str()));
		}
	}

	#[test]
	fn deserialize_accepts_list_or_string() {
		let from_list: ScopeSet = serde_json::from_str("[\"api\",\"id\"]")
			.expect("List form should deserialize successfully.");
		let from_string: ScopeSet =
			serde_json::from_str("\"api id\"").expect("String form should deserialize.");

		assert_eq!(from_list, from_string);
		assert_eq!(
			serde_json::to_string(&from_list).expect("Scope set should serialize successfully."),
			"[\"api\",\"id\"]"
		);
	}
}
