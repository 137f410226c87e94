//! Ordered multi-value mappings for headers and query arguments.
//!
//! # Responsibilities
//! - Canonicalize header names (`x-forwarded-proto` → `X-Forwarded-Proto`)
//! - Keep every value of a repeated key, in arrival order
//! - Serialize as a JSON object whose values are always arrays
//!
//! # Design Decisions
//! - Backed by a `Vec` of entries: keys keep insertion order, lookups are
//!   linear (header counts are small)
//! - Values are never merged into a single comma-joined string

use axum::http::HeaderMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Canonical form of a header name: first letter and every letter after a
/// hyphen upper-cased, the rest lower-cased.
///
/// Names containing bytes outside the HTTP token set are returned unchanged.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    out
}

/// Non-alphanumeric bytes allowed in a header name (RFC 9110 `tchar`).
const TOKEN_PUNCTUATION: &[u8] = b"!#$%&'*+-.^_`|~";

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || TOKEN_PUNCTUATION.contains(&b)
}

/// An insertion-ordered mapping of key to a list of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`, creating the key at the end if it is new.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into()),
            None => self.entries.push((key, vec![value.into()])),
        }
    }

    /// Build from request headers, canonicalizing every key.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut map = Self::new();
        for (name, value) in headers.iter() {
            map.append(
                canonical_header_key(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        map
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    pub fn from_query(raw: &str) -> Self {
        let mut map = Self::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            map.append(key.into_owned(), value.into_owned());
        }
        map
    }

    /// Re-encode as a query string. An empty map encodes to `""`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.entries {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// All values for `key`, if present.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// First value for `key`, or `""`.
    pub fn get(&self, key: &str) -> &str {
        self.get_all(key)
            .and_then(|v| v.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueMapVisitor;

        impl<'de> Visitor<'de> for ValueMapVisitor {
            type Value = ValueMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of string arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ValueMap, A::Error> {
                let mut map = ValueMap::new();
                while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
                    for value in values {
                        map.append(key.clone(), value);
                    }
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ValueMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_canonical_header_key() {
        assert_eq!(canonical_header_key("user-agent"), "User-Agent");
        assert_eq!(canonical_header_key("X-FORWARDED-PROTO"), "X-Forwarded-Proto");
        assert_eq!(canonical_header_key("foo"), "Foo");
        assert_eq!(canonical_header_key("a--b"), "A--B");
        // Not a token: left alone
        assert_eq!(canonical_header_key("bad header"), "bad header");
    }

    #[test]
    fn test_repeated_headers_keep_order() {
        let mut headers = HeaderMap::new();
        headers.insert("foo-header", HeaderValue::from_static("foo"));
        headers.append("bar-header", HeaderValue::from_static("bar1"));
        headers.append("bar-header", HeaderValue::from_static("bar2"));

        let map = ValueMap::from_headers(&headers);
        assert_eq!(map.get_all("Foo-Header").unwrap(), ["foo"]);
        assert_eq!(map.get_all("Bar-Header").unwrap(), ["bar1", "bar2"]);
        assert!(map.get_all("bar-header").is_none());
    }

    #[test]
    fn test_serializes_single_values_as_lists() {
        let mut map = ValueMap::new();
        map.append("User-Agent", "test");
        map.append("Accept", "a");
        map.append("Accept", "b");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"User-Agent":["test"],"Accept":["a","b"]}"#);
    }

    #[test]
    fn test_query_decoding() {
        let map = ValueMap::from_query("foo=bar&foo=baz&q=hello+world&e=%26");
        assert_eq!(map.get_all("foo").unwrap(), ["bar", "baz"]);
        assert_eq!(map.get("q"), "hello world");
        assert_eq!(map.get("e"), "&");
        assert_eq!(map.get("missing"), "");
    }

    #[test]
    fn test_empty_query_encodes_empty() {
        let map = ValueMap::from_query("");
        assert!(map.is_empty());
        assert_eq!(map.encode(), "");
    }

    #[test]
    fn test_deserialize_from_json() {
        let map: ValueMap = serde_json::from_str(r#"{"A":["1","2"],"B":[]}"#).unwrap();
        assert_eq!(map.get_all("A").unwrap(), ["1", "2"]);
        // Keys with no values carry no entry
        assert!(map.get_all("B").is_none());
    }
}
