//! Parameter schema and bound parameter values.
//!
//! A [`ParameterSpec`] is the static description of one accepted parameter.
//! At call time each supplied argument is paired with its spec into a fresh
//! [`BoundParameter`]; specs themselves are never mutated.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parameter location in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamLocation {
    /// Path parameter (e.g. `page/{id}`)
    Path,
    /// Query parameter (e.g. `?refer=...`)
    #[default]
    Query,
    /// Request body
    Body,
}

impl ParamLocation {
    /// Parse a location tag from a method table.
    ///
    /// Unrecognized tags fall back to [`ParamLocation::Query`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "path" => Self::Path,
            "body" => Self::Body,
            _ => Self::Query,
        }
    }

    /// The tag as written in method tables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParamLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Static description of one parameter accepted by a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// The parameter name as sent on the wire.
    pub name: String,
    /// Where the parameter is placed in the HTTP request.
    pub location: ParamLocation,
    /// Informational type tag (e.g. `"string"`, `"integer"`).
    pub type_name: String,
    /// Whether the caller must supply a non-null value.
    pub required: bool,
}

impl ParameterSpec {
    /// Create an optional query parameter of type `string`.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Query,
            type_name: "string".to_string(),
            required: false,
        }
    }

    /// Create a required path parameter of type `string`.
    #[must_use]
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Path,
            type_name: "string".to_string(),
            required: true,
        }
    }

    /// Set the type tag.
    #[must_use]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Mark the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the parameter as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Pair this spec with a caller-supplied value.
    ///
    /// The resulting [`BoundParameter`] keeps location and type but carries
    /// no `required` flag.
    #[must_use]
    pub fn bind(&self, value: Value) -> BoundParameter {
        BoundParameter {
            name: self.name.clone(),
            location: self.location,
            type_name: self.type_name.clone(),
            value,
        }
    }
}

/// A parameter ready to be placed into a request.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParameter {
    /// The parameter name.
    pub name: String,
    /// Where the value goes.
    pub location: ParamLocation,
    /// Informational type tag.
    pub type_name: String,
    /// The caller-supplied value.
    pub value: Value,
}

impl BoundParameter {
    /// A `string` query parameter, used for injected authentication values.
    #[must_use]
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Query,
            type_name: "string".to_string(),
            value: Value::String(value.into()),
        }
    }
}
