//! Schema-driven client for the LiveRe API.
//!
//! Services are described as data: a root URL, a service path and per-resource
//! method tables. [`Resource::call`] validates arguments against those tables,
//! injects the client credential, builds and signs the request, and decodes
//! the response into a [`Model`].
//!
//! # Example
//!
//! ```ignore
//! use livere::{Client, ClientConfig};
//! use livere::services::count::Count;
//!
//! let config = ClientConfig::builder()
//!     .client_id("my-id")
//!     .client_secret("my-secret")
//!     .build()?;
//!
//! let count = Count::new(Client::new(config));
//! let page = count.page.get("www.bloter.net/archives/244922", Default::default()).await?;
//! println!("{:?}", page.count());
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod auth;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
mod resource;
mod service;
pub mod services;
mod transport;

pub use auth::{Authenticator, ClientCredentials, Credential, ID_PARAM, TOKEN_PARAM};
pub use client::Client;
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_CLIENT_ID,
    ENV_CLIENT_SECRET,
};
pub use resource::Resource;
pub use service::Service;
pub use transport::{BoxedService, HyperTransport, HyperTransportBuilder};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use livere_core::{
    Arguments, BoundParameter, CallInfo, ContentType, ErasedModel, Error, HttpClient, LogEvent,
    LogLevel, Logger, Method, MethodSpec, Model, NullLogger, OPT_PARAMS, POST_BODY, ParamLocation,
    ParameterSpec, PostBody, Request, RequestBuilder, RequestTarget, ResourceDescriptor, Response,
    Result, TracingLogger, build_target, from_json, from_value, strip_nulls, to_json,
};

// Re-export http types for status codes and headers
pub use livere_core::{StatusCode, header};

pub use url;
