//! Client credentials and request signing.
//!
//! LiveRe authenticates every call with two query parameters, `id` and
//! `token`. [`Resource::call`](crate::Resource::call) injects them from
//! [`Authenticator::credential`]; [`Authenticator::sign`] runs last and only
//! fills in what is still missing.

use std::fmt;

use bytes::Bytes;

use crate::{ClientConfig, Request, Result};

/// Query parameter carrying the client id.
pub const ID_PARAM: &str = "id";

/// Query parameter carrying the client secret.
pub const TOKEN_PARAM: &str = "token";

/// The `{id, secret}` pair resolved at call time.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Client id.
    pub id: String,
    /// Client secret.
    pub secret: String,
}

impl Credential {
    /// Create a credential.
    #[must_use]
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Produces credentials and signs built requests.
///
/// One authenticator is bound to a [`Client`](crate::Client) for its whole
/// lifetime. Signing may add authentication data but must leave every
/// other part of the request untouched.
pub trait Authenticator: Send + Sync {
    /// The credential to inject as `id`/`token`.
    fn credential(&self) -> Credential;

    /// Add authentication data to a built request.
    ///
    /// # Errors
    ///
    /// Implementations may fail if the request cannot be signed.
    fn sign(&self, request: Request<Bytes>) -> Result<Request<Bytes>>;
}

/// Query-parameter authentication with a client id and secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    /// Create from an id and secret.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Take the credentials from a configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.client_id.clone(), config.client_secret.clone())
    }

    /// The client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Authenticator for ClientCredentials {
    fn credential(&self) -> Credential {
        Credential::new(self.client_id.clone(), self.client_secret.clone())
    }

    fn sign(&self, request: Request<Bytes>) -> Result<Request<Bytes>> {
        let has_id = request.query_value(ID_PARAM).is_some();
        let has_token = request.query_value(TOKEN_PARAM).is_some();
        if has_id && has_token {
            return Ok(request);
        }

        let (method, mut url, headers, body, extensions) = request.into_parts();
        {
            let mut pairs = url.query_pairs_mut();
            if !has_id {
                pairs.append_pair(ID_PARAM, &self.client_id);
            }
            if !has_token {
                pairs.append_pair(TOKEN_PARAM, &self.client_secret);
            }
        }

        Ok(Request::from_parts(method, url, headers, body, extensions))
    }
}
