//! Method tables: the declarative description of a resource.
//!
//! A [`ResourceDescriptor`] maps method names to [`MethodSpec`]s. Tables are
//! plain data; they can be built in code or loaded from JSON shaped like
//!
//! ```json
//! {
//!   "methods": {
//!     "get": {
//!       "path": "page",
//!       "httpMethod": "GET",
//!       "parameters": {
//!         "refer": { "location": "query", "type": "string", "required": true }
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::{Error, Method, ParamLocation, ParameterSpec, Result};

/// One named remote operation: verb, path template and parameter schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name, matched case-exactly.
    pub name: String,
    /// HTTP verb.
    pub http_method: Method,
    /// Path template relative to the service path (e.g. `page` or `page/{id}`).
    pub path: String,
    /// Accepted parameters, in declaration order.
    pub parameters: Vec<ParameterSpec>,
}

impl MethodSpec {
    /// Create a method without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, http_method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http_method,
            path: path.into(),
            parameters: Vec::new(),
        }
    }

    /// Declare a parameter. Redeclaring a name replaces the earlier spec in place.
    #[must_use]
    pub fn param(mut self, spec: ParameterSpec) -> Self {
        match self.parameters.iter_mut().find(|p| p.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.parameters.push(spec),
        }
        self
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A named group of methods bound to one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Owning service name (e.g. `count`).
    pub service_name: String,
    /// Resource name (e.g. `page`).
    pub resource_name: String,
    methods: HashMap<String, MethodSpec>,
}

impl ResourceDescriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new(service_name: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            resource_name: resource_name.into(),
            methods: HashMap::new(),
        }
    }

    /// Add a method to the table.
    #[must_use]
    pub fn method(mut self, spec: MethodSpec) -> Self {
        self.methods.insert(spec.name.clone(), spec);
        self
    }

    /// Look up a method by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.get(name)
    }

    /// Iterate over all methods (unordered).
    pub fn methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.values()
    }

    /// Load a method table from a JSON document.
    ///
    /// The document is either `{"methods": {name: method, ...}}` or a single
    /// method object, which is then registered under the resource name.
    pub fn from_json(
        service_name: impl Into<String>,
        resource_name: impl Into<String>,
        json: &str,
    ) -> Result<Self> {
        let value: Value = crate::from_json(json.as_bytes())?;
        Self::from_value(service_name, resource_name, value)
    }

    /// Load a method table from an already-parsed JSON value.
    pub fn from_value(
        service_name: impl Into<String>,
        resource_name: impl Into<String>,
        value: Value,
    ) -> Result<Self> {
        let resource_name = resource_name.into();
        let mut descriptor = Self::new(service_name, resource_name.clone());

        let tables: Vec<(String, RawMethod)> = match value {
            Value::Object(mut map) if map.contains_key("methods") => {
                let methods = map.remove("methods").unwrap_or_default();
                let table: MethodTable = crate::from_value(methods)?;
                table.0
            }
            other => vec![(resource_name, crate::from_value(other)?)],
        };

        for (name, raw) in tables {
            descriptor = descriptor.method(MethodSpec {
                name,
                http_method: raw.http_method,
                path: raw.path,
                parameters: raw.parameters,
            });
        }

        if descriptor.methods.is_empty() {
            return Err(Error::invalid_request(format!(
                "resource '{}' declares no methods",
                descriptor.resource_name
            )));
        }
        Ok(descriptor)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethod {
    path: String,
    http_method: Method,
    #[serde(default, deserialize_with = "ordered_parameters")]
    parameters: Vec<ParameterSpec>,
}

#[derive(Deserialize)]
struct RawParameter {
    #[serde(default)]
    location: ParamLocation,
    #[serde(rename = "type", default = "default_type")]
    type_name: String,
    #[serde(default)]
    required: bool,
}

fn default_type() -> String {
    "string".to_string()
}

/// `{name: method}` map, kept in document order.
struct MethodTable(Vec<(String, RawMethod)>);

impl<'de> Deserialize<'de> for MethodTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_map(EntriesVisitor::<RawMethod>::default())
            .map(MethodTable)
    }
}

fn ordered_parameters<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<ParameterSpec>, D::Error> {
    let entries = deserializer.deserialize_map(EntriesVisitor::<RawParameter>::default())?;
    Ok(entries
        .into_iter()
        .map(|(name, raw)| ParameterSpec {
            name,
            location: raw.location,
            type_name: raw.type_name,
            required: raw.required,
        })
        .collect())
}

struct EntriesVisitor<T>(std::marker::PhantomData<T>);

impl<T> Default for EntriesVisitor<T> {
    fn default() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
    type Value = Vec<(String, T)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, value)) = map.next_entry::<String, T>()? {
            entries.push((name, value));
        }
        Ok(entries)
    }
}
