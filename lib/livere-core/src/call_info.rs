//! Call identity for middleware access.

use std::fmt;

/// Which service method produced a request.
///
/// Resource dispatch stores this in the request
/// extensions so transport middleware can report the method and its path
/// template (e.g. `page/{id}`) rather than the resolved URL.
///
/// # Example
///
/// ```ignore
/// // In middleware
/// if let Some(call) = request.extensions().get::<CallInfo>() {
///     println!("{call} -> {}", call.path_template);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallInfo {
    /// Service name.
    pub service: String,
    /// Resource name.
    pub resource: String,
    /// Method name.
    pub method: String,
    /// Path template before expansion.
    pub path_template: String,
}

impl CallInfo {
    /// Create a new call identity.
    #[must_use]
    pub fn new(
        service: impl Into<String>,
        resource: impl Into<String>,
        method: impl Into<String>,
        path_template: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            resource: resource.into(),
            method: method.into(),
            path_template: path_template.into(),
        }
    }
}

impl fmt::Display for CallInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.service, self.resource, self.method)
    }
}
