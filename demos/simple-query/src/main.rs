//! Simple count query
//!
//! Reads the comment count of one page through the `count` service.
//!
//! ```text
//! LIVERE_CLIENT_ID=... LIVERE_CLIENT_SECRET=... RUST_LOG=livere=info \
//!     cargo run -p simple-query-example -- www.bloter.net/archives/244922
//! ```

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use livere::prelude::*;
use livere::services::count::Count;
use tracing_subscriber::EnvFilter;

const DEFAULT_REFER: &str = "www.bloter.net/archives/244922";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Comment count of `refer`, with `0` for pages the API has never seen.
async fn comment_count<H: HttpClient>(count: &Count<H>, refer: &str) -> livere::Result<u64> {
    let page = count.page.get(refer, Map::new()).await?;
    Ok(page.count().unwrap_or_default())
}

#[tokio::main]
async fn main() -> livere::Result<()> {
    init_tracing();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Not set your api info: {e}");
            std::process::exit(1);
        }
    };

    let refer = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_REFER.to_string());

    let transport = HyperTransport::builder()
        .config(config.clone())
        .with_logging()
        .build();
    let count = Count::new(Client::with_transport(transport, &config));

    println!("{}", comment_count(&count, &refer).await?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    #[tokio::test]
    async fn prints_count_from_api() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/count/page"))
            .and(query_param("refer", DEFAULT_REFER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 42})))
            .mount(&mock_server)
            .await;

        let config = ClientConfig::builder()
            .client_id("id")
            .client_secret("secret")
            .base_url(mock_server.uri())
            .build()
            .expect("config");
        let count = Count::with_root_url(Client::new(config), "");

        assert_eq!(comment_count(&count, DEFAULT_REFER).await.expect("count"), 42);
    }

    #[tokio::test]
    async fn unknown_page_counts_as_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/count/page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let config = ClientConfig::builder()
            .base_url(mock_server.uri())
            .build()
            .expect("config");
        let count = Count::with_root_url(Client::new(config), "");

        assert_eq!(comment_count(&count, "nowhere").await.expect("count"), 0);
    }
}
