//! Declarative status-code tables.
//!
//! A [`ResponseTable`] lists the status codes an endpoint declares, each
//! with its payload shape and classification. Every other code falls into
//! the default variant, whose payload is always a [`RuntimeError`](crate::RuntimeError)
//! and whose classification follows the code family.
//!
//! Tables are usually written with [`response_table!`](crate::response_table):
//!
//! ```
//! use verdict_core::{Method, response_table};
//!
//! const DELETE_QUEUE: verdict_core::ResponseTable = response_table! {
//!     DELETE "/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}" => DeleteQueue;
//!     200 deleteQueueOK: empty, success, "A successful response.";
//!     204 deleteQueueNoContent: opaque, success, "No content.";
//!     403 deleteQueueForbidden: opaque, failure, "You don't have permission to access the resource.";
//!     404 deleteQueueNotFound: opaque, failure, "Resource does not exist.";
//!     default: "An unexpected error response.";
//! };
//!
//! assert_eq!(DELETE_QUEUE.endpoint().method(), Method::Delete);
//! assert_eq!(DELETE_QUEUE.declared_codes().collect::<Vec<_>>(), [200, 204, 403, 404]);
//! ```

use crate::Endpoint;

/// Payload shape of a declared status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// The body is ignored without being read.
    Empty,
    /// The body is decoded into an untyped value.
    Opaque,
    /// The body is decoded into a [`RuntimeError`](crate::RuntimeError) record.
    Structured,
}

/// Whether a variant is returned as a success or as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Returned on the success side.
    Success,
    /// Returned on the error side.
    Failure,
}

impl Classification {
    /// Classification derived from the status code family: 2xx is a success.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        if code / 100 == 2 {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Returns `true` for [`Classification::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One declared status code of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusEntry {
    /// Status code.
    pub code: u16,
    /// Variant name, e.g. `deleteQueueNotFound`.
    pub name: &'static str,
    /// Documentation of the response.
    pub description: &'static str,
    /// Payload shape.
    pub shape: PayloadShape,
    /// Fixed classification.
    pub classification: Classification,
}

impl StatusEntry {
    /// Create a status entry.
    #[must_use]
    pub const fn new(
        code: u16,
        name: &'static str,
        shape: PayloadShape,
        classification: Classification,
    ) -> Self {
        Self {
            code,
            name,
            description: "",
            shape,
            classification,
        }
    }

    /// Set the documentation of the response.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// Status-code table of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTable {
    endpoint: Endpoint,
    entries: &'static [StatusEntry],
    default_description: &'static str,
}

impl ResponseTable {
    /// Create a table from its declared entries.
    ///
    /// # Panics
    ///
    /// Panics if two entries declare the same status code. In a `const`
    /// item this is a compile-time error.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub const fn new(endpoint: Endpoint, entries: &'static [StatusEntry]) -> Self {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                assert!(
                    entries[i].code != entries[j].code,
                    "status code declared twice in response table"
                );
                j += 1;
            }
            i += 1;
        }
        Self {
            endpoint,
            entries,
            default_description: "",
        }
    }

    /// Set the documentation of the default variant.
    #[must_use]
    pub const fn with_default_description(mut self, description: &'static str) -> Self {
        self.default_description = description;
        self
    }

    /// Endpoint described by this table.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Declared entries, in declaration order.
    #[must_use]
    pub const fn entries(&self) -> &'static [StatusEntry] {
        self.entries
    }

    /// Documentation of the default variant.
    #[must_use]
    pub const fn default_description(&self) -> &'static str {
        self.default_description
    }

    /// Entry declared for `code`, if any.
    #[must_use]
    pub fn entry(&self, code: u16) -> Option<&'static StatusEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Returns `true` if `code` is declared.
    #[must_use]
    pub fn declares(&self, code: u16) -> bool {
        self.entry(code).is_some()
    }

    /// Declared status codes, in declaration order.
    pub fn declared_codes(&self) -> impl Iterator<Item = u16> + use<> {
        self.entries.iter().map(|entry| entry.code)
    }
}

/// Declare a [`ResponseTable`] as a constant expression.
///
/// Each line declares `code name: shape, classification[, "description"]`
/// where `shape` is `empty`, `opaque` or `structured` and `classification` is `success`
/// or `failure`. An optional trailing `default: "description";` documents
/// the default variant.
#[macro_export]
macro_rules! response_table {
    (
        $method:ident $path:literal => $operation:ident;
        $( $code:literal $name:ident : $shape:ident, $class:ident $(, $doc:literal)? ; )*
        $( default : $default_doc:literal ; )?
    ) => {{
        const ENTRIES: &[$crate::StatusEntry] = &[
            $(
                $crate::StatusEntry::new(
                    $code,
                    stringify!($name),
                    $crate::response_table!(@shape $shape),
                    $crate::response_table!(@class $class),
                )
                $( .with_description($doc) )?
            ),*
        ];
        $crate::ResponseTable::new(
            $crate::Endpoint::new(
                $crate::response_table!(@method $method),
                $path,
                stringify!($operation),
            ),
            ENTRIES,
        )
        $( .with_default_description($default_doc) )?
    }};

    (@method GET) => { $crate::Method::Get };
    (@method POST) => { $crate::Method::Post };
    (@method PUT) => { $crate::Method::Put };
    (@method DELETE) => { $crate::Method::Delete };
    (@method PATCH) => { $crate::Method::Patch };
    (@method HEAD) => { $crate::Method::Head };
    (@method OPTIONS) => { $crate::Method::Options };

    (@shape empty) => { $crate::PayloadShape::Empty };
    (@shape opaque) => { $crate::PayloadShape::Opaque };
    (@shape structured) => { $crate::PayloadShape::Structured };

    (@class success) => { $crate::Classification::Success };
    (@class failure) => { $crate::Classification::Failure };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    const TABLE: ResponseTable = crate::response_table! {
        DELETE "/api/v1/orgs/{owner}/components/{uuid}" => DeleteComponentHub;
        200 deleteComponentHubOK: empty, success;
        204 deleteComponentHubNoContent: opaque, success, "No content.";
        403 deleteComponentHubForbidden: opaque, failure;
        404 deleteComponentHubNotFound: opaque, failure;
        409 deleteComponentHubConflict: structured, failure, "Component is still in use.";
        default: "An unexpected error response.";
    };

    #[test]
    fn classification_from_status() {
        assert_eq!(Classification::from_status(200), Classification::Success);
        assert_eq!(Classification::from_status(201), Classification::Success);
        assert_eq!(Classification::from_status(299), Classification::Success);
        assert_eq!(Classification::from_status(199), Classification::Failure);
        assert_eq!(Classification::from_status(300), Classification::Failure);
        assert_eq!(Classification::from_status(500), Classification::Failure);
        assert!(Classification::Success.is_success());
        assert!(!Classification::Failure.is_success());
    }

    #[test]
    fn macro_builds_table() {
        let endpoint = TABLE.endpoint();
        assert_eq!(endpoint.method(), Method::Delete);
        assert_eq!(
            endpoint.path().as_str(),
            "/api/v1/orgs/{owner}/components/{uuid}"
        );
        assert_eq!(endpoint.operation(), "DeleteComponentHub");
        assert_eq!(TABLE.default_description(), "An unexpected error response.");
        assert_eq!(TABLE.entries().len(), 5);
    }

    #[test]
    fn entry_lookup() {
        let entry = TABLE.entry(204).expect("204 declared");
        assert_eq!(entry.name, "deleteComponentHubNoContent");
        assert_eq!(entry.shape, PayloadShape::Opaque);
        assert_eq!(entry.classification, Classification::Success);
        assert_eq!(entry.description, "No content.");

        let entry = TABLE.entry(200).expect("200 declared");
        assert_eq!(entry.shape, PayloadShape::Empty);
        assert_eq!(entry.description, "");

        let entry = TABLE.entry(409).expect("409 declared");
        assert_eq!(entry.shape, PayloadShape::Structured);
        assert_eq!(entry.classification, Classification::Failure);

        assert!(TABLE.declares(404));
        assert!(!TABLE.declares(500));
        assert!(TABLE.entry(201).is_none());
    }

    #[test]
    fn declared_codes_in_order() {
        let codes: Vec<_> = TABLE.declared_codes().collect();
        assert_eq!(codes, [200, 204, 403, 404, 409]);
    }

    #[test]
    #[should_panic(expected = "status code declared twice")]
    fn duplicate_codes_rejected() {
        static ENTRIES: [StatusEntry; 2] = [
            StatusEntry::new(404, "a", PayloadShape::Opaque, Classification::Failure),
            StatusEntry::new(404, "b", PayloadShape::Empty, Classification::Failure),
        ];
        let endpoint = Endpoint::new(Method::Get, "/", "Dup");
        let _ = ResponseTable::new(endpoint, &ENTRIES);
    }
}
