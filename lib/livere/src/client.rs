//! The API client: credentials, logging sink and transport in one place.
//!
//! [`Client`] is the single point where network I/O happens. It maps
//! non-success statuses to [`Error::Api`] and decodes response bodies into
//! [`Model`] types or raw JSON values.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use url::Url;

use crate::{
    Authenticator, CallInfo, ClientConfig, ClientCredentials, ContentType, Error, HttpClient,
    HyperTransport, LogEvent, LogLevel, Logger, Model, Request, Response, Result, TracingLogger,
};

/// API client wrapping a transport with an authenticator and a logger.
///
/// Cloning is cheap; every [`Service`](crate::Service) built from a client
/// shares its transport and credentials.
///
/// # Example
///
/// ```ignore
/// use livere::{Client, ClientConfig};
///
/// let config = ClientConfig::builder()
///     .client_id("my-id")
///     .client_secret("my-secret")
///     .build()?;
/// let client = Client::new(config);
/// ```
pub struct Client<H = HyperTransport> {
    transport: H,
    authenticator: Arc<dyn Authenticator>,
    logger: Arc<dyn Logger>,
    base_url: Url,
}

impl<H: Clone> Clone for Client<H> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            authenticator: Arc::clone(&self.authenticator),
            logger: Arc::clone(&self.logger),
            base_url: self.base_url.clone(),
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for Client<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Client<HyperTransport> {
    /// Create a client over a [`HyperTransport`] built from `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let transport = HyperTransport::builder().config(config.clone()).build();
        Self::with_transport(transport, &config)
    }

    /// Create a client from `LIVERE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are missing or the base URL is invalid.
    pub fn from_env() -> Result<Self> {
        ClientConfig::from_env().map(Self::new)
    }
}

impl<H: HttpClient> Client<H> {
    /// Create a client over any transport.
    ///
    /// Credentials and base URL come from `config`; logging goes to `tracing`.
    #[must_use]
    pub fn with_transport(transport: H, config: &ClientConfig) -> Self {
        Self {
            transport,
            authenticator: Arc::new(ClientCredentials::from_config(config)),
            logger: Arc::new(TracingLogger),
            base_url: config.base_url.clone(),
        }
    }

    /// Replace the authenticator.
    #[must_use]
    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Arc::new(authenticator);
        self
    }

    /// Replace the logging sink.
    #[must_use]
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Default base URL for services without a root URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The bound authenticator.
    #[must_use]
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    /// The logging sink.
    #[must_use]
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }

    /// Execute a request and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`], [`Error::Tls`] or [`Error::Timeout`] on transport failure
    /// - [`Error::Api`] for a non-2xx status
    /// - [`Error::Decoding`] if the body is not JSON or does not fit `T`
    pub async fn execute<T: Model>(&self, request: Request<Bytes>) -> Result<T> {
        let call = request.extensions().get::<CallInfo>().cloned();
        let result = match self.send(request).await {
            Ok(response) => decode_typed(&response),
            Err(err) => Err(err),
        };
        self.report(call.as_ref(), result)
    }

    /// Execute a request and return the decoded body as a raw value.
    ///
    /// An empty body gives [`Value::Null`]; a non-JSON body is returned as
    /// a string.
    ///
    /// # Errors
    ///
    /// Same as [`Client::execute`], except that non-JSON bodies are not an error.
    pub async fn execute_raw(&self, request: Request<Bytes>) -> Result<Value> {
        let call = request.extensions().get::<CallInfo>().cloned();
        let result = match self.send(request).await {
            Ok(response) => decode_raw(&response),
            Err(err) => Err(err),
        };
        self.report(call.as_ref(), result)
    }

    async fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(api_error(&response))
        }
    }

    fn report<T>(&self, call: Option<&CallInfo>, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            let mut event = LogEvent::new(LogLevel::Error, "Service call failed")
                .with("kind", err.kind())
                .with("error", err.to_string());
            if let Some(call) = call {
                event = event
                    .with("service", call.service.as_str())
                    .with("resource", call.resource.as_str())
                    .with("method", call.method.as_str());
            }
            self.logger.log(event);
        }
        result
    }
}

fn is_json_response(response: &Response<Bytes>) -> bool {
    response.content_type().is_none_or(ContentType::is_json)
}

fn decode_raw(response: &Response<Bytes>) -> Result<Value> {
    if response.body().is_empty() {
        return Ok(Value::Null);
    }
    if is_json_response(response) {
        response.json()
    } else {
        response.text().map(Value::String)
    }
}

fn decode_typed<T: Model>(response: &Response<Bytes>) -> Result<T> {
    if !is_json_response(response) {
        let content_type = response.content_type().unwrap_or_default();
        return Err(Error::decoding(
            "",
            format!("expected a JSON response, got '{content_type}'"),
        ));
    }
    let value = if response.body().is_empty() {
        Value::Null
    } else {
        response.json()?
    };
    T::from_plain_value(value)
}

fn api_error(response: &Response<Bytes>) -> Error {
    let status = response.status();
    let body = error_body(response);
    let message = body
        .as_ref()
        .and_then(error_message)
        .map_or_else(|| canonical_reason(status), ToString::to_string);

    match body {
        Some(body) => Error::api_with_body(status, message, body),
        None => Error::api(status, message),
    }
}

fn error_body(response: &Response<Bytes>) -> Option<Value> {
    let body = response.body();
    if body.is_empty() {
        return None;
    }
    serde_json::from_slice(body).ok().or_else(|| {
        Some(Value::String(String::from_utf8_lossy(body).into_owned()))
    })
}

fn error_message(body: &Value) -> Option<&str> {
    body.pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .or_else(|| body.get("error").and_then(Value::as_str))
}

fn canonical_reason(status: u16) -> String {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
        .to_string()
}
