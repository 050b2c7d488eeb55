//! Ordered key/value multimap for authorization-request query parameters.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Query parameters the OAuth2 core prepares before redirecting to the authorization endpoint.
///
/// Insertion order is preserved and a key may carry several values. [`set`](Self::set)
/// replaces every value of a key in place of its first occurrence, matching the semantics
/// of browser `URLSearchParams`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationParams {
	pairs: Vec<(String, String)>,
}
impl AuthorizationParams {
	/// Creates an empty parameter collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses an `application/x-www-form-urlencoded` query string.
	pub fn from_query(query: &str) -> Self {
		form_urlencoded::parse(query.as_bytes()).into_owned().collect()
	}

	/// Sets `key` to a single value, replacing any existing values.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		let key = key.into();
		let value = value.into();

		match self.pairs.iter().position(|(candidate, _)| *candidate == key) {
			Some(first) => {
				self.pairs[first].1 = value;

				let mut idx = 0;

				self.pairs.retain(|(candidate, _)| {
					let keep = idx <= first || *candidate != key;

					idx += 1;

					keep
				});
			},
			None => self.pairs.push((key, value)),
		}

		self
	}

	/// Appends a value for `key`, keeping existing ones.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.pairs.push((key.into(), value.into()));

		self
	}

	/// Removes every value of `key`.
	pub fn remove(&mut self, key: &str) -> &mut Self {
		self.pairs.retain(|(candidate, _)| candidate != key);

		self
	}

	/// Returns the first value of `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs.iter().find(|(candidate, _)| candidate == key).map(|(_, value)| value.as_str())
	}

	/// Returns every value of `key`, in insertion order.
	pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
		self.pairs
			.iter()
			.filter(move |(candidate, _)| candidate == key)
			.map(|(_, value)| value.as_str())
	}

	/// Returns true if `key` has at least one value.
	pub fn contains(&self, key: &str) -> bool {
		self.pairs.iter().any(|(candidate, _)| candidate == key)
	}

	/// Number of stored pairs.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns true if no pairs are stored.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Iterator over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Appends every pair to the query string of `url`.
	pub fn apply_to(&self, url: &mut Url) {
		if self.pairs.is_empty() {
			return;
		}

		url.query_pairs_mut().extend_pairs(self.iter());
	}

	/// Encodes the pairs as an `application/x-www-form-urlencoded` string.
	pub fn to_query(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for AuthorizationParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self { pairs: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect() }
	}
}
impl IntoIterator for AuthorizationParams {
	type IntoIter = std::vec::IntoIter<(String, String)>;
	type Item = (String, String);

	fn into_iter(self) -> Self::IntoIter {
		self.pairs.into_iter()
	}
}
impl Display for AuthorizationParams {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.to_query())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn set_replaces_all_values_at_first_position() {
		let mut params = AuthorizationParams::new();

		params.append("a", "1").append("scope", "x").append("b", "2").append("scope", "y");
		params.set("scope", "z");

		assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", "1"), ("scope", "z"), ("b", "2")]);
	}

	#[test]
	fn set_appends_missing_keys() {
		let mut params = AuthorizationParams::new();

		params.set("scope", "api").set("nonce", "n");

		assert_eq!(params.get("nonce"), Some("n"));
		assert_eq!(params.len(), 2);
	}

	#[test]
	fn get_all_and_remove() {
		let mut params = AuthorizationParams::from_query("x=1&x=2&y=3");

		assert_eq!(params.get_all("x").collect::<Vec<_>>(), vec!["1", "2"]);

		params.remove("x");

		assert!(!params.contains("x"));
		assert_eq!(params.to_query(), "y=3");
	}

	#[test]
	fn apply_to_encodes_values() {
		let mut url =
			Url::parse("https://example.com/authorize").expect("Fixture URL should parse.");
		let params: AuthorizationParams = [("scope", "full refresh_token")].into_iter().collect();

		params.apply_to(&mut url);

		assert_eq!(url.as_str(), "https://example.com/authorize?scope=full+refresh_token");
		assert_eq!(params.to_string(), "scope=full+refresh_token");
	}
}
