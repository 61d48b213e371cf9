//! # Chapter 1: Describing a Service
//!
//! Services are data. A [`Resource`](crate::Resource) is a method table bound
//! to a [`Service`](crate::Service); every typed method is a thin wrapper
//! around [`Resource::call`](crate::Resource::call).
//!
//! ## Method Tables
//!
//! Build them in code:
//!
//! ```ignore
//! use livere::{Method, MethodSpec, ParameterSpec, ResourceDescriptor};
//!
//! let comments = ResourceDescriptor::new("comment", "thread").method(
//!     MethodSpec::new("list", Method::Get, "thread/{seq}/comments")
//!         .param(ParameterSpec::path("seq").type_name("integer"))
//!         .param(ParameterSpec::query("limit").type_name("integer")),
//! );
//! ```
//!
//! Or load them from JSON:
//!
//! ```ignore
//! let comments = ResourceDescriptor::from_json("comment", "thread", r#"{
//!     "methods": {
//!         "list": {
//!             "path": "thread/{seq}/comments",
//!             "httpMethod": "GET",
//!             "parameters": {
//!                 "seq": { "location": "path", "type": "integer", "required": true },
//!                 "limit": { "location": "query", "type": "integer" }
//!             }
//!         }
//!     }
//! }"#)?;
//! ```
//!
//! ## Binding to a Service
//!
//! ```ignore
//! use std::sync::Arc;
//! use livere::{Client, Service};
//!
//! let service = Arc::new(Service::new(client, "comment", "v1", "https://livere.me/", "v1/comment/"));
//! let thread = service.resource(comments);
//! ```
//!
//! ## Arguments
//!
//! | Entry | Purpose |
//! |-------|---------|
//! | `Arguments::param` | A declared parameter |
//! | `Arguments::opt_param` | Merged over the parameters before validation |
//! | `Arguments::post_body` | JSON request body, never validated |
//!
//! ```ignore
//! use livere::{Arguments, PostBody};
//!
//! let raw = thread
//!     .call_raw("list", Arguments::new().param("seq", 7).opt_param("limit", 20))
//!     .await?;
//! ```
//!
//! Undeclared names are rejected, required ones must be non-null, and
//! optional ones left out are not sent at all.
//!
//! ## Typed Results
//!
//! Any `Serialize + Deserialize` type becomes a result type with an empty
//! [`Model`](crate::Model) impl:
//!
//! ```ignore
//! #[derive(Debug, Serialize, Deserialize)]
//! struct CommentList {
//!     total: Option<u64>,
//! }
//!
//! impl Model for CommentList {}
//!
//! let list: CommentList = thread.call("list", Arguments::new().param("seq", 7)).await?;
//! ```
//!
//! The same type can be sent as a body with `PostBody::model(value)`; unset
//! fields are dropped before encoding.
//!
//! ## Next Steps
//!
//! - [Chapter 2: Errors and Logging][super::chapter_2] - Failure kinds, log events, middleware
