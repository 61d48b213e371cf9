//! The `count` service (v1): comment counts per page.
//!
//! # Example
//!
//! ```ignore
//! use livere::Client;
//! use livere::services::count::Count;
//!
//! let count = Count::new(Client::from_env()?);
//! let page = count.page.get("www.bloter.net/archives/244922", Default::default()).await?;
//! println!("{:?}", page.count());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    Arguments, Client, HttpClient, HyperTransport, Method, MethodSpec, Model, ParameterSpec,
    Resource, ResourceDescriptor, Result, Service,
};

/// Root URL of the `count` service.
pub const ROOT_URL: &str = "https://livere.me/";

/// Path prefix of every `count` method.
pub const SERVICE_PATH: &str = "v1/count/";

/// API version.
pub const VERSION: &str = "v1";

/// Service name.
pub const SERVICE_NAME: &str = "count";

/// The `count` service and its resources.
#[derive(Debug)]
pub struct Count<H = HyperTransport> {
    /// The `page` resource.
    pub page: PageResource<H>,
    service: Arc<Service<H>>,
}

impl<H: HttpClient> Count<H> {
    /// Build the service on top of a client.
    #[must_use]
    pub fn new(client: Client<H>) -> Self {
        Self::with_root_url(client, ROOT_URL)
    }

    /// Build the service against another root URL (a gateway or a mock
    /// server). An empty root falls back to the client's base URL.
    #[must_use]
    pub fn with_root_url(client: Client<H>, root_url: impl Into<String>) -> Self {
        let service = Arc::new(Service::new(
            client,
            SERVICE_NAME,
            VERSION,
            root_url,
            SERVICE_PATH,
        ));
        let page = PageResource {
            resource: service.resource(page_methods()),
        };
        Self { page, service }
    }

    /// The underlying service definition.
    #[must_use]
    pub fn service(&self) -> &Service<H> {
        &self.service
    }
}

fn page_methods() -> ResourceDescriptor {
    ResourceDescriptor::new(SERVICE_NAME, "page").method(
        MethodSpec::new("get", Method::Get, "page")
            .param(ParameterSpec::query("refer").required()),
    )
}

/// The `page` resource: `count.page.*`.
#[derive(Debug)]
pub struct PageResource<H = HyperTransport> {
    resource: Resource<H>,
}

impl<H: HttpClient> PageResource<H> {
    /// Comment count of the page at `refer` (a URL without scheme).
    ///
    /// `opt_params` are merged over `refer` before validation.
    ///
    /// # Errors
    ///
    /// Any error of [`Resource::call`].
    pub async fn get(
        &self,
        refer: impl Into<String>,
        opt_params: Map<String, Value>,
    ) -> Result<CountPage> {
        let args = Arguments::new()
            .param("refer", refer.into())
            .opt_params(opt_params);
        self.resource.call("get", args).await
    }

    /// The generic resource behind the typed methods.
    #[must_use]
    pub const fn resource(&self) -> &Resource<H> {
        &self.resource
    }
}

/// Result of `count.page.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountPage {
    count: Option<u64>,
    #[serde(rename = "repSeq")]
    rep_seq: Option<u64>,
}

impl Model for CountPage {}

impl CountPage {
    /// Number of comments.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }

    /// Set the number of comments.
    pub const fn set_count(&mut self, count: Option<u64>) {
        self.count = count;
    }

    /// Sequence number of the page's comment thread.
    #[must_use]
    pub const fn rep_seq(&self) -> Option<u64> {
        self.rep_seq
    }

    /// Set the thread sequence number.
    pub const fn set_rep_seq(&mut self, rep_seq: Option<u64>) {
        self.rep_seq = rep_seq;
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde_json::json;

    use super::*;
    use crate::{ClientConfig, Error, Request, Response};

    struct Offline;

    impl HttpClient for Offline {
        async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
            Err(Error::connection("offline"))
        }
    }

    #[test]
    fn page_table_matches_json_definition() {
        let loaded = ResourceDescriptor::from_json(
            SERVICE_NAME,
            "page",
            r#"{
                "methods": {
                    "get": {
                        "path": "page",
                        "httpMethod": "GET",
                        "parameters": {
                            "refer": { "location": "query", "type": "string", "required": true }
                        }
                    }
                }
            }"#,
        )
        .expect("valid table");
        assert_eq!(loaded, page_methods());
    }

    #[test]
    fn count_service_definition() {
        let count = Count::new(Client::with_transport(Offline, &ClientConfig::default()));
        let service = count.service();
        assert_eq!(service.name(), "count");
        assert_eq!(service.version(), "v1");
        assert_eq!(service.root_url(), "https://livere.me/");
        assert_eq!(service.service_path(), "v1/count/");
        assert!(count.page.resource().descriptor().get("get").is_some());

        let local = Count::with_root_url(
            Client::with_transport(Offline, &ClientConfig::default()),
            "",
        );
        assert_eq!(
            local.service().base_url().expect("base").as_str(),
            "https://livere.me/"
        );
    }

    #[test]
    fn count_page_model() {
        let mut page = CountPage::from_plain_value(json!({"count": 42, "unknown": "x"}))
            .expect("decode");
        assert_eq!(page.count(), Some(42));
        assert_eq!(page.rep_seq(), None);

        page.set_rep_seq(Some(7));
        assert_eq!(
            page.to_plain_value().expect("encode"),
            json!({"count": 42, "repSeq": 7})
        );

        page.set_field("count", json!(3)).expect("set");
        assert_eq!(page.count(), Some(3));
        assert_eq!(page.get_field("repSeq").expect("get"), Some(json!(7)));
    }

    #[tokio::test]
    async fn get_requires_network() {
        let count = Count::new(Client::with_transport(Offline, &ClientConfig::default()));
        let err = count
            .page
            .get("www.bloter.net/archives/244922", Map::new())
            .await
            .expect_err("offline");
        assert!(err.is_connection());
    }
}
