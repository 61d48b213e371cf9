//! Body serialization utilities.

use bytes::Bytes;
use serde_json::Value;

use crate::{Error, Result};

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json; charset=UTF-8`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string, as sent in `content-type`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=UTF-8",
            Self::PlainText => "text/plain",
        }
    }

    /// Returns `true` if a `content-type` header value denotes JSON.
    ///
    /// Matches `application/json` and `+json` suffixes, ignoring parameters.
    #[must_use]
    pub fn is_json(header: &str) -> bool {
        let mime = header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        mime == "application/json" || mime.ends_with("+json")
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if JSON serialization fails.
///
/// # Example
///
/// ```
/// use livere_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Page { refer: String }
///
/// let page = Page { refer: "www.bloter.net".to_string() };
/// let bytes = to_json(&page).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"refer":"www.bloter.net"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes, reporting the path of the failing field.
///
/// # Errors
///
/// Returns [`Error::Decoding`] with the JSON path if deserialization fails.
///
/// # Example
///
/// ```
/// use livere_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Page { count: u64 }
///
/// let page: Page = from_json(br#"{"count": 42}"#).expect("deserialize");
/// assert_eq!(page.count, 42);
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(decoding_error)
}

/// Deserialize a plain JSON value, reporting the path of the failing field.
///
/// # Errors
///
/// Returns [`Error::Decoding`] with the JSON path if deserialization fails.
pub fn from_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(decoding_error)
}

#[allow(clippy::needless_pass_by_value)]
fn decoding_error(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    let path = err.path().to_string();
    Error::decoding(path, err.inner().to_string())
}

/// Recursively remove null-valued fields from objects and arrays.
///
/// # Example
///
/// ```
/// use livere_core::strip_nulls;
/// use serde_json::json;
///
/// let value = strip_nulls(json!({"a": 1, "b": null, "c": [{"d": null}, null]}));
/// assert_eq!(value, json!({"a": 1, "c": [{}]}));
/// ```
#[must_use]
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}
