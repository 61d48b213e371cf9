//! Service definitions.
//!
//! A [`Service`] names one API (e.g. `count`), its root URL and service path,
//! and owns the [`Client`] shared by all of its resources.

use std::sync::Arc;

use url::Url;

use crate::{Client, HttpClient, HyperTransport, ResourceDescriptor, Result};

/// One remote API service.
///
/// # Example
///
/// ```ignore
/// use livere::{Client, Service};
///
/// let service = Service::new(client, "count", "v1", "https://livere.me/", "v1/count/");
/// let page = service.resource(descriptor);
/// ```
#[derive(Debug)]
pub struct Service<H = HyperTransport> {
    client: Client<H>,
    service_name: String,
    version: String,
    root_url: String,
    service_path: String,
}

impl<H: HttpClient> Service<H> {
    /// Create a service.
    ///
    /// An empty `root_url` means the client's base URL is used.
    #[must_use]
    pub fn new(
        client: Client<H>,
        service_name: impl Into<String>,
        version: impl Into<String>,
        root_url: impl Into<String>,
        service_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_name: service_name.into(),
            version: version.into(),
            root_url: root_url.into(),
            service_path: service_path.into(),
        }
    }

    /// Wrap in an [`Arc`] and bind a resource table to it.
    #[must_use]
    pub fn resource(self: &Arc<Self>, descriptor: ResourceDescriptor) -> crate::Resource<H> {
        crate::Resource::new(Arc::clone(self), descriptor)
    }

    /// The shared client.
    #[must_use]
    pub const fn client(&self) -> &Client<H> {
        &self.client
    }

    /// Service name (e.g. `count`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.service_name
    }

    /// API version (e.g. `v1`).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Declared root URL, possibly empty.
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Path prefix prepended to every method path (e.g. `v1/count/`).
    #[must_use]
    pub fn service_path(&self) -> &str {
        &self.service_path
    }

    /// The URL request targets are resolved against.
    ///
    /// The root URL when set, the client's base URL otherwise; always ends
    /// with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the root URL
    /// does not parse.
    pub fn base_url(&self) -> Result<Url> {
        let mut base = if self.root_url.is_empty() {
            self.client.base_url().clone()
        } else {
            Url::parse(&self.root_url)?
        };

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::{ClientConfig, Error, Request, Response};

    struct Offline;

    impl HttpClient for Offline {
        async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
            Err(Error::connection("offline"))
        }
    }

    fn client(base_url: &str) -> Client<Offline> {
        let config = ClientConfig::builder()
            .base_url(base_url)
            .build()
            .expect("config");
        Client::with_transport(Offline, &config)
    }

    #[test]
    fn root_url_wins_over_client_base() {
        let service = Service::new(
            client("http://localhost:1234/"),
            "count",
            "v1",
            "https://livere.me",
            "v1/count/",
        );
        assert_eq!(service.base_url().expect("base").as_str(), "https://livere.me/");
        assert_eq!(service.name(), "count");
        assert_eq!(service.version(), "v1");
        assert_eq!(service.service_path(), "v1/count/");
    }

    #[test]
    fn empty_root_url_uses_client_base() {
        let service = Service::new(client("http://localhost:1234/api"), "count", "v1", "", "");
        assert_eq!(
            service.base_url().expect("base").as_str(),
            "http://localhost:1234/api/"
        );
    }

    #[test]
    fn invalid_root_url_is_reported() {
        let service = Service::new(client("http://localhost/"), "count", "v1", "::", "");
        assert!(matches!(service.base_url(), Err(Error::InvalidUrl(_))));
    }
}
