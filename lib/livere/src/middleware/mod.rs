//! Tower middleware layers for the LiveRe transport.
//!
//! Layers wrap [`HyperTransport`](crate::HyperTransport) through
//! [`HyperTransportBuilder::layer`](crate::HyperTransportBuilder::layer).
//! Retry, caching and rate limiting are not provided here. Callers
//! that want them can bring their own tower layers.
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use livere::HyperTransport;
//! use livere::middleware::LoggingLayer;
//!
//! let transport = HyperTransport::builder()
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
