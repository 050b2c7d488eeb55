//! Normalized profile contract and the Salesforce userinfo mapping.
//!
//! Userinfo payloads are untrusted: every field is optional, and a field that is missing or
//! carries an unexpected JSON type only means the matching profile field stays empty. The full
//! payload is always kept on the profile so callers can reach fields that are not promoted.

// std
use std::ops::Deref;
// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, provider::PROVIDER_NAME};

/// Single `{ value }` entry used for emails and photos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValue {
	/// Email address or photo URL.
	pub value: String,
}
impl ProfileValue {
	/// Wraps a value.
	pub fn new(value: impl Into<String>) -> Self {
		Self { value: value.into() }
	}
}

/// Structured person name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
	/// Given (first) name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub given_name: Option<String>,
	/// Family (last) name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_name: Option<String>,
}

/// Provider-agnostic profile consumed by the verify callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2Profile {
	/// Stable subject identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Human-readable display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	/// Structured name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<ProfileName>,
	/// Email addresses.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub emails: Option<Vec<ProfileValue>>,
	/// Photo URLs.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub photos: Option<Vec<ProfileValue>>,
	/// Tag of the provider that produced the profile.
	pub provider: String,
}
impl OAuth2Profile {
	/// Creates an empty profile tagged with `provider`.
	pub fn new(provider: impl Into<String>) -> Self {
		Self {
			id: None,
			display_name: None,
			name: None,
			emails: None,
			photos: None,
			provider: provider.into(),
		}
	}
}

/// Normalized Salesforce profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesforceProfile {
	/// Base profile fields.
	#[serde(flatten)]
	pub profile: OAuth2Profile,
	/// Salesforce organization (org) identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub organization_id: Option<String>,
	/// Untouched userinfo payload.
	#[serde(rename = "_json")]
	pub raw: Value,
}
impl SalesforceProfile {
	/// Normalizes a parsed userinfo payload.
	///
	/// Never fails: a payload that is not an object yields a profile holding only the provider
	/// tag and the raw value.
	pub fn from_userinfo(raw: Value) -> Self {
		SalesforceUserinfo::from_raw(&raw).normalize(raw)
	}

	/// Returns a field of the raw payload that was not promoted, such as `preferred_username`
	/// or `urls`.
	pub fn raw_field(&self, key: &str) -> Option<&Value> {
		self.raw.get(key)
	}
}
impl Deref for SalesforceProfile {
	type Target = OAuth2Profile;

	fn deref(&self) -> &Self::Target {
		&self.profile
	}
}

/// Promoted subset of the userinfo payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesforceUserinfo {
	/// Subject identifier (identity URL).
	pub sub: Option<String>,
	/// Organization identifier.
	pub organization_id: Option<String>,
	/// Community nickname.
	pub nickname: Option<String>,
	/// Primary email address.
	pub email: Option<String>,
	/// Given name.
	pub given_name: Option<String>,
	/// Family name.
	pub family_name: Option<String>,
	/// Photo URLs; ignored unless the payload carries them as an object.
	pub photos: Option<SalesforcePhotos>,
}
impl SalesforceUserinfo {
	/// Picks the promoted fields out of `raw`, skipping any that are not strings.
	pub fn from_raw(raw: &Value) -> Self {
		let photos = raw.get("photos").filter(|photos| photos.is_object()).map(|photos| {
			SalesforcePhotos {
				picture: string_field(photos, "picture"),
				thumbnail: string_field(photos, "thumbnail"),
			}
		});

		Self {
			sub: string_field(raw, "sub"),
			organization_id: string_field(raw, "organization_id"),
			nickname: string_field(raw, "nickname"),
			email: string_field(raw, "email"),
			given_name: string_field(raw, "given_name"),
			family_name: string_field(raw, "family_name"),
			photos,
		}
	}

	/// Maps the promoted fields onto the normalized contract, attaching `raw` verbatim.
	pub fn normalize(self, raw: Value) -> SalesforceProfile {
		let SalesforceUserinfo {
			sub,
			organization_id,
			nickname,
			email,
			given_name,
			family_name,
			photos,
		} = self;
		let name = match (given_name, family_name) {
			(None, None) => None,
			(given_name, family_name) => Some(ProfileName { given_name, family_name }),
		};
		let photo = photos.and_then(|photos| photos.thumbnail.or(photos.picture));
		let profile = OAuth2Profile {
			id: sub,
			display_name: nickname,
			name,
			emails: email.map(|email| vec![ProfileValue::new(email)]),
			photos: photo.map(|photo| vec![ProfileValue::new(photo)]),
			provider: PROVIDER_NAME.into(),
		};

		SalesforceProfile { profile, organization_id, raw }
	}
}

/// `photos` object of the userinfo payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesforcePhotos {
	/// Full-size profile picture.
	pub picture: Option<String>,
	/// Thumbnail profile picture.
	pub thumbnail: Option<String>,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
	value.get(key).and_then(Value::as_str).map(str::to_owned)
}
