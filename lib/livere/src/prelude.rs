//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use livere::prelude::*;
//! ```

pub use crate::{
    Arguments, Authenticator, Client, ClientConfig, ClientCredentials, Error, HttpClient,
    HyperTransport, LogEvent, LogLevel, Logger, Method, MethodSpec, Model, ParameterSpec,
    PostBody, Resource, ResourceDescriptor, Result, Service, header,
};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value, json};
