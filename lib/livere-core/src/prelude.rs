//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use livere_core::prelude::*;
//! ```

pub use crate::{
    Arguments, ContentType, Error, HttpClient, LogEvent, LogLevel, Logger, Method, MethodSpec,
    Model, ParamLocation, ParameterSpec, PostBody, Request, RequestBuilder, ResourceDescriptor,
    Response, Result, from_json, to_json,
};
