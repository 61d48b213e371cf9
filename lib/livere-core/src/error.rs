//! Error types for the LiveRe client.

use derive_more::{Display, Error, From};
use serde_json::Value;

/// Main error type for LiveRe API calls.
///
/// The first three variants are validation failures raised before any
/// network I/O; the caller can recover by fixing its input.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The method name is not part of the resource's method table.
    #[display("unknown function: {service}->{resource}->{method}()")]
    #[from(skip)]
    UnknownMethod {
        /// Service name (e.g. `count`).
        #[error(not(source))]
        service: String,
        /// Resource name (e.g. `page`).
        resource: String,
        /// Method name as given by the caller.
        method: String,
    },

    /// An argument has no matching parameter in the method schema.
    #[display("({method}) unknown parameter: '{parameter}'")]
    #[from(skip)]
    UnknownParameter {
        /// Method name.
        #[error(not(source))]
        method: String,
        /// The offending argument key.
        parameter: String,
    },

    /// A required parameter is absent (or null) in the merged arguments.
    #[display("({method}) missing required param: '{parameter}'")]
    #[from(skip)]
    MissingParameter {
        /// Method name.
        #[error(not(source))]
        method: String,
        /// The missing parameter name.
        parameter: String,
    },

    /// The request body could not be reduced to JSON.
    #[display("JSON encoding failed: {_0}")]
    #[from]
    Encoding(serde_json::Error),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The API answered with a non-success status.
    #[display("API error {status}: {message}")]
    #[from(skip)]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the payload, or the status reason.
        message: String,
        /// Decoded error payload, if the response had one.
        #[error(not(source))]
        body: Option<Value>,
    },

    /// The response body could not be decoded as the expected type.
    #[display("decoding error at '{path}': {message}")]
    #[from(skip)]
    Decoding {
        /// JSON path to the error (e.g. `page.count`).
        path: String,
        /// Error message.
        message: String,
    },

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown method error.
    #[must_use]
    pub fn unknown_method(
        service: impl Into<String>,
        resource: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self::UnknownMethod {
            service: service.into(),
            resource: resource.into(),
            method: method.into(),
        }
    }

    /// Create an unknown parameter error.
    #[must_use]
    pub fn unknown_parameter(method: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::UnknownParameter {
            method: method.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a missing parameter error.
    #[must_use]
    pub fn missing_parameter(method: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            method: method.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an API error from status code and message.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Create an API error with a decoded payload.
    #[must_use]
    pub fn api_with_body(status: u16, message: impl Into<String>, body: Value) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a decoding error with path context.
    #[must_use]
    pub fn decoding(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decoding {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for failures detected before any network I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownMethod { .. } | Self::UnknownParameter { .. } | Self::MissingParameter { .. }
        )
    }

    /// Returns `true` for network-level failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the error payload if this is an API error with a body.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the API error payload into a typed value.
    ///
    /// Returns `None` if there is no payload or this is not an API error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ApiFailure {
    ///     code: String,
    ///     message: String,
    /// }
    ///
    /// if let Err(e) = count.page.get("www.bloter.net", Map::new()).await {
    ///     if let Some(Ok(failure)) = e.decode_body::<ApiFailure>() {
    ///         println!("{}: {}", failure.code, failure.message);
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_value(body.clone()))
    }

    /// Short machine-readable kind, used as log context.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownMethod { .. } => "unknown_method",
            Self::UnknownParameter { .. } => "unknown_parameter",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::Encoding(_) => "encoding",
            Self::Connection(_) | Self::Tls(_) | Self::Timeout => "transport",
            Self::Api { .. } => "api",
            Self::Decoding { .. } => "decoding",
            Self::InvalidRequest(_) => "invalid_request",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }
}
