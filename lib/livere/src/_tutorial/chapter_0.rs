//! # Chapter 0: Getting Started
//!
//! Your first LiveRe call in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Configure a [`Client`](crate::Client) with your client id and secret
//! - Build the `count` service
//! - Read a typed result
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! livere = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Call
//!
//! ```ignore
//! use livere::{Client, ClientConfig};
//! use livere::services::count::Count;
//!
//! #[tokio::main]
//! async fn main() -> livere::Result<()> {
//!     let config = ClientConfig::builder()
//!         .client_id("<YOUR_CLIENT_ID>")
//!         .client_secret("<YOUR_CLIENT_SECRET>")
//!         .build()?;
//!
//!     let count = Count::new(Client::new(config));
//!     let page = count
//!         .page
//!         .get("www.bloter.net/archives/244922", Default::default())
//!         .await?;
//!
//!     println!("comments: {:?}", page.count());
//!     Ok(())
//! }
//! ```
//!
//! `ClientConfig::from_env()` reads `LIVERE_CLIENT_ID` and
//! `LIVERE_CLIENT_SECRET` instead.
//!
//! ## What Goes Over the Wire
//!
//! ```text
//! GET https://livere.me/v1/count/page?refer=www.bloter.net%2Farchives%2F244922&id=<id>&token=<secret>
//! ```
//!
//! - `refer` comes from your argument, percent-encoded
//! - `id` and `token` are always added from the configured credential
//!
//! ## Next Steps
//!
//! - [Chapter 1: Describing a Service][super::chapter_1] - Method tables, arguments and bodies
