//! Core types for the schema-driven LiveRe API client.
//!
//! This crate provides the transport-independent pieces:
//! - [`ParameterSpec`], [`MethodSpec`] and [`ResourceDescriptor`] - method tables
//! - [`Arguments`] and [`PostBody`] - what a caller passes to one call
//! - [`BoundParameter`] and [`build_target`] - request target composition
//! - [`Model`] - typed payloads and their plain-value form
//! - [`Request`], [`RequestBuilder`] and [`Response`] - HTTP messages
//! - [`HttpClient`] - transport trait
//! - [`Logger`] and [`LogEvent`] - structured diagnostics
//! - [`Error`] and [`Result`] - error handling

mod args;
mod body;
mod builder;
mod call_info;
mod client;
mod error;
mod logger;
mod method;
mod model;
mod param;
pub mod prelude;
mod request;
mod response;
mod schema;

pub use args::{Arguments, OPT_PARAMS, POST_BODY};
pub use body::{ContentType, from_json, from_value, strip_nulls, to_json};
pub use builder::{RequestTarget, build_target};
pub use call_info::CallInfo;
pub use client::HttpClient;
pub use error::{Error, Result};
pub use logger::{LogEvent, LogLevel, Logger, NullLogger, TracingLogger};
pub use method::Method;
pub use model::{ErasedModel, Model, PostBody};
pub use param::{BoundParameter, ParamLocation, ParameterSpec};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use schema::{MethodSpec, ResourceDescriptor};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
