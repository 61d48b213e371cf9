//! Caller-supplied arguments for one call.

use serde_json::{Map, Value};

use crate::{Error, PostBody, Result};

/// Reserved key carrying the request payload.
pub const POST_BODY: &str = "postBody";

/// Reserved key carrying extra parameters merged before validation.
pub const OPT_PARAMS: &str = "optParams";

/// The argument bag of one call: named parameters plus the two reserved
/// pseudo-parameters `postBody` and `optParams`.
///
/// # Example
///
/// ```
/// use livere_core::Arguments;
/// use serde_json::json;
///
/// let args = Arguments::new()
///     .param("refer", "www.bloter.net/archives/244922")
///     .opt_param("title", "Hello");
///
/// assert_eq!(args.get("refer"), Some(&json!("www.bloter.net/archives/244922")));
/// ```
#[derive(Debug, Default)]
pub struct Arguments {
    params: Map<String, Value>,
    post_body: Option<PostBody>,
    opt_params: Option<Map<String, Value>>,
}

impl Arguments {
    /// Create an empty argument bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named parameter.
    ///
    /// The reserved names are routed like in [`Arguments::from_value`]:
    /// `postBody` becomes the payload and an object under `optParams` is
    /// merged into the `optParams` bag. A null under either name counts as
    /// absent. A non-object `optParams` stays a plain parameter, so dispatch
    /// rejects it as unknown.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        match value.into() {
            Value::Null if name == POST_BODY => self.post_body = None,
            body if name == POST_BODY => self.post_body = Some(PostBody::from(body)),
            Value::Null if name == OPT_PARAMS => {}
            Value::Object(map) if name == OPT_PARAMS => return self.opt_params(map),
            value => {
                self.params.insert(name, value);
            }
        }
        self
    }

    /// Set the request payload.
    #[must_use]
    pub fn post_body(mut self, body: PostBody) -> Self {
        self.post_body = Some(body);
        self
    }

    /// Add one entry to the `optParams` bag.
    #[must_use]
    pub fn opt_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.opt_params
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add every entry of a map to the `optParams` bag.
    #[must_use]
    pub fn opt_params(mut self, params: Map<String, Value>) -> Self {
        self.opt_params.get_or_insert_with(Map::new).extend(params);
        self
    }

    /// A top-level parameter (not looking into `optParams`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Split into `(params, postBody, optParams)`.
    #[must_use]
    pub fn into_parts(self) -> (Map<String, Value>, Option<PostBody>, Option<Map<String, Value>>) {
        (self.params, self.post_body, self.opt_params)
    }

    /// Build from an untyped JSON object such as
    /// `{"refer": "...", "optParams": {...}, "postBody": {...}}`.
    ///
    /// A null `postBody` or `optParams` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the value is not an object or
    /// `optParams` is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut params) = value else {
            return Err(Error::invalid_request("arguments must be a JSON object"));
        };

        let post_body = match params.remove(POST_BODY) {
            None | Some(Value::Null) => None,
            Some(body) => Some(PostBody::from(body)),
        };

        let opt_params = match params.remove(OPT_PARAMS) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => return Err(Error::invalid_request("optParams must be a JSON object")),
        };

        Ok(Self {
            params,
            post_body,
            opt_params,
        })
    }
}

impl TryFrom<Value> for Arguments {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}
