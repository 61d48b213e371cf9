//! # Chapter 2: Errors and Logging
//!
//! ## Failure Kinds
//!
//! Every call returns [`livere::Result<T>`](crate::Result). Validation
//! failures happen before any request is sent:
//!
//! ```ignore
//! use livere::Error;
//!
//! match count.page.resource().call_raw("get", Arguments::new()).await {
//!     Err(Error::MissingParameter { parameter, .. }) => println!("need {parameter}"),
//!     Err(e) if e.is_transport() => println!("network: {e}"),
//!     Err(Error::Api { status, message, .. }) => println!("{status}: {message}"),
//!     Err(e) => println!("other: {e}"),
//!     Ok(value) => println!("{value}"),
//! }
//! ```
//!
//! | Variant | When |
//! |---------|------|
//! | `UnknownMethod` | Method name not in the table |
//! | `UnknownParameter` | Argument not declared |
//! | `MissingParameter` | Required argument absent or null |
//! | `Encoding` | `postBody` cannot be encoded |
//! | `Connection`, `Tls`, `Timeout` | Transport failure |
//! | `Api` | Non-2xx status, with the decoded error payload |
//! | `Decoding` | Body does not fit the result type |
//!
//! Nothing is retried.
//!
//! ## Log Events
//!
//! The client reports through a [`Logger`](crate::Logger). The default
//! forwards to `tracing`; plug in your own sink:
//!
//! ```ignore
//! use livere::{LogEvent, Logger};
//!
//! struct Stderr;
//!
//! impl Logger for Stderr {
//!     fn log(&self, event: LogEvent) {
//!         eprintln!("[{}] {} {}", event.level, event.message, serde_json::Value::from(event.context));
//!     }
//! }
//!
//! let client = Client::new(config).with_logger(Stderr);
//! ```
//!
//! The `token` value is never written to a log.
//!
//! ## Transport Middleware
//!
//! ```ignore
//! use std::time::Duration;
//! use livere::{Client, HyperTransport};
//!
//! let transport = HyperTransport::builder()
//!     .config(config.clone())
//!     .timeout(Duration::from_secs(5))
//!     .with_logging()
//!     .build();
//! let client = Client::with_transport(transport, &config);
//! ```
//!
//! Any tower layer can be added with `.layer(...)`.
