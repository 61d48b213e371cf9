//! Method dispatch for one resource.
//!
//! [`Resource::call`] is the entry point every concrete resource method
//! funnels into. It validates the arguments against the method table,
//! injects the credential, builds and signs the request, then hands it to
//! the [`Client`](crate::Client).

use std::sync::Arc;

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::auth::{ID_PARAM, TOKEN_PARAM};
use crate::{
    Arguments, BoundParameter, CallInfo, Error, HttpClient, HyperTransport, LogEvent, LogLevel,
    MethodSpec, Model, PostBody, Request, ResourceDescriptor, Result, Service,
    build_target,
};

/// A named group of methods bound to a [`Service`].
#[derive(Debug)]
pub struct Resource<H = HyperTransport> {
    service: Arc<Service<H>>,
    descriptor: ResourceDescriptor,
}

impl<H> Clone for Resource<H> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            descriptor: self.descriptor.clone(),
        }
    }
}

impl<H: HttpClient> Resource<H> {
    /// Bind a method table to a service.
    #[must_use]
    pub fn new(service: Arc<Service<H>>, descriptor: ResourceDescriptor) -> Self {
        Self {
            service,
            descriptor,
        }
    }

    /// The owning service.
    #[must_use]
    pub fn service(&self) -> &Service<H> {
        &self.service
    }

    /// The method table.
    #[must_use]
    pub const fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Call a method and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownMethod`], [`Error::UnknownParameter`] or
    ///   [`Error::MissingParameter`] before any network I/O
    /// - [`Error::Encoding`] if the `postBody` cannot be encoded
    /// - any error of [`Client::execute`](crate::Client::execute)
    pub async fn call<T: Model>(&self, method_name: &str, args: Arguments) -> Result<T> {
        let request = self.request(method_name, args)?;
        self.service.client().execute(request).await
    }

    /// Call a method and return the untyped response body.
    ///
    /// # Errors
    ///
    /// Same as [`Resource::call`].
    pub async fn call_raw(&self, method_name: &str, args: Arguments) -> Result<Value> {
        let request = self.request(method_name, args)?;
        self.service.client().execute_raw(request).await
    }

    /// Validate the arguments and build the signed request, without sending it.
    ///
    /// # Errors
    ///
    /// Validation, encoding, URL and signing errors.
    pub fn request(&self, method_name: &str, args: Arguments) -> Result<Request<Bytes>> {
        let Some(method) = self.descriptor.get(method_name) else {
            self.log(self.event(LogLevel::Error, "Service method unknown", method_name));
            return Err(Error::unknown_method(
                &self.descriptor.service_name,
                &self.descriptor.resource_name,
                method_name,
            ));
        };

        let (mut params, post_body, opt_params) = args.into_parts();

        let body = match post_body.map(PostBody::encode).transpose() {
            Ok(body) => body,
            Err(err) => {
                self.log(
                    self.event(LogLevel::Error, "Request body encoding failed", method_name)
                        .with("error", err.to_string()),
                );
                return Err(err);
            }
        };

        if let Some(opt_params) = opt_params {
            params.extend(opt_params);
        }

        let mut bound = self.bind(method, params)?;

        let credential = self.service.client().authenticator().credential();
        bound.retain(|param| param.name != ID_PARAM && param.name != TOKEN_PARAM);
        bound.push(BoundParameter::query(ID_PARAM, credential.id));
        bound.push(BoundParameter::query(TOKEN_PARAM, credential.secret));

        let request = match self.build(method, &bound, body) {
            Ok(request) => request,
            Err(err) => {
                self.log(
                    self.event(LogLevel::Error, "Request construction failed", method_name)
                        .with("error", err.to_string()),
                );
                return Err(err);
            }
        };

        self.log(
            self.event(LogLevel::Info, "Service call", method_name)
                .with("parameters", redacted_parameters(&bound)),
        );
        Ok(request)
    }

    /// Resolve the target URL, attach the body and sign.
    fn build(
        &self,
        method: &MethodSpec,
        bound: &[BoundParameter],
        body: Option<String>,
    ) -> Result<Request<Bytes>> {
        let target = build_target(self.service.service_path(), &method.path, bound);
        let url = self.service.base_url()?.join(&target.relative_url())?;

        let mut builder = Request::builder(method.http_method, url).extension(CallInfo::new(
            &self.descriptor.service_name,
            &self.descriptor.resource_name,
            &method.name,
            &method.path,
        ));
        if let Some(body) = body {
            builder = builder.json_body(body);
        }

        self.service
            .client()
            .authenticator()
            .sign(builder.build())
    }

    /// Check the merged arguments against the method's schema and pair each
    /// supplied value with its spec, in declaration order.
    fn bind(&self, method: &MethodSpec, mut params: Map<String, Value>) -> Result<Vec<BoundParameter>> {
        if let Some(unknown) = params
            .keys()
            .find(|key| method.parameter(key).is_none())
        {
            self.log(
                self.event(LogLevel::Error, "Service parameter unknown", &method.name)
                    .with("parameter", unknown.as_str()),
            );
            return Err(Error::unknown_parameter(&method.name, unknown));
        }

        let mut bound = Vec::with_capacity(method.parameters.len() + 2);
        for spec in &method.parameters {
            match params.remove(&spec.name) {
                Some(value) if !value.is_null() => bound.push(spec.bind(value)),
                _ if spec.required => {
                    self.log(
                        self.event(LogLevel::Error, "Service parameter missing", &method.name)
                            .with("parameter", spec.name.as_str()),
                    );
                    return Err(Error::missing_parameter(&method.name, &spec.name));
                }
                _ => {}
            }
        }
        Ok(bound)
    }

    fn event(&self, level: LogLevel, message: &'static str, method_name: &str) -> LogEvent {
        LogEvent::new(level, message)
            .with("service", self.descriptor.service_name.as_str())
            .with("resource", self.descriptor.resource_name.as_str())
            .with("method", method_name)
    }

    fn log(&self, event: LogEvent) {
        self.service.client().logger().log(event);
    }
}

fn redacted_parameters(bound: &[BoundParameter]) -> Value {
    bound
        .iter()
        .map(|param| {
            let value = if param.name == TOKEN_PARAM {
                Value::from("***")
            } else {
                param.value.clone()
            };
            (param.name.clone(), value)
        })
        .collect::<Map<_, _>>()
        .into()
}
