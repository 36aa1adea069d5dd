//! Endpoint metadata used to label dispatched responses.
//!
//! None of these types influence dispatch. They only feed the
//! human-readable description of a [`StatusOutcome`](crate::StatusOutcome).

use derive_more::Display;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method.
    #[display("GET")]
    Get,
    /// POST method.
    #[display("POST")]
    Post,
    /// PUT method.
    #[display("PUT")]
    Put,
    /// DELETE method.
    #[display("DELETE")]
    Delete,
    /// PATCH method.
    #[display("PATCH")]
    Patch,
    /// HEAD method.
    #[display("HEAD")]
    Head,
    /// OPTIONS method.
    #[display("OPTIONS")]
    Options,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
        }
    }
}

/// A URL path template, kept with its placeholders unresolved.
///
/// ```
/// use verdict_core::PathTemplate;
///
/// let template = PathTemplate::new("/api/v1/orgs/{owner}/components/{uuid}");
/// assert_eq!(template.placeholders().collect::<Vec<_>>(), ["owner", "uuid"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Names of the `{placeholder}` segments, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.0.split('{').skip(1).filter_map(|rest| {
            rest.split_once('}')
                .map(|(name, _)| name)
                .filter(|name| !name.is_empty())
        })
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Static description of one REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    method: Method,
    path: PathTemplate,
    operation: &'static str,
}

impl Endpoint {
    /// Create an endpoint from its method, path template and operation id.
    #[must_use]
    pub const fn new(method: Method, path: &'static str, operation: &'static str) -> Self {
        Self {
            method,
            path: PathTemplate::new(path),
            operation,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Path template.
    #[must_use]
    pub const fn path(&self) -> PathTemplate {
        self.path
    }

    /// Operation identifier, e.g. `DeleteQueue`.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn method_into_http() {
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
        assert_eq!(http::Method::from(Method::Patch), http::Method::PATCH);
    }

    #[test]
    fn path_template_placeholders() {
        let template = PathTemplate::new("/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}");
        let names: Vec<_> = template.placeholders().collect();
        assert_eq!(names, ["owner", "agent", "uuid"]);

        let template = PathTemplate::new("/healthz");
        assert_eq!(template.placeholders().count(), 0);

        let template = PathTemplate::new("/broken/{}/{open");
        assert_eq!(template.placeholders().count(), 0);
    }

    #[test]
    fn endpoint_display() {
        let endpoint = Endpoint::new(
            Method::Delete,
            "/api/v1/orgs/{owner}/components/{uuid}",
            "DeleteComponentHub",
        );
        assert_eq!(
            endpoint.to_string(),
            "DELETE /api/v1/orgs/{owner}/components/{uuid}"
        );
        assert_eq!(endpoint.operation(), "DeleteComponentHub");
    }
}
