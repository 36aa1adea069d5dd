//! Declared response tables of the SDK endpoints.
//!
//! Every table follows the same contract: `200` carries no payload, `204`
//! forwards an opaque payload, `403` and `404` are failures with an opaque
//! payload, and anything else is read as a [`RuntimeError`](crate::RuntimeError).

use verdict_core::{ResponseTable, response_table};

/// `DELETE /api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}`
pub const DELETE_QUEUE: ResponseTable = response_table! {
    DELETE "/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}" => DeleteQueue;
    200 deleteQueueOK: empty, success, "A successful response.";
    204 deleteQueueNoContent: opaque, success, "No content.";
    403 deleteQueueForbidden: opaque, failure, "You don't have permission to access the resource.";
    404 deleteQueueNotFound: opaque, failure, "Resource does not exist.";
    default: "An unexpected error response";
};

/// `DELETE /api/v1/orgs/{owner}/components/{uuid}`
pub const DELETE_COMPONENT_HUB: ResponseTable = response_table! {
    DELETE "/api/v1/orgs/{owner}/components/{uuid}" => DeleteComponentHub;
    200 deleteComponentHubOK: empty, success, "A successful response.";
    204 deleteComponentHubNoContent: opaque, success, "No content.";
    403 deleteComponentHubForbidden: opaque, failure, "You don't have permission to access the resource.";
    404 deleteComponentHubNotFound: opaque, failure, "Resource does not exist.";
    default: "An unexpected error response";
};

/// `DELETE /api/v1/orgs/{owner}/agents/{uuid}`
pub const DELETE_AGENT: ResponseTable = response_table! {
    DELETE "/api/v1/orgs/{owner}/agents/{uuid}" => DeleteAgent;
    200 deleteAgentOK: empty, success, "A successful response.";
    204 deleteAgentNoContent: opaque, success, "No content.";
    403 deleteAgentForbidden: opaque, failure, "You don't have permission to access the resource.";
    404 deleteAgentNotFound: opaque, failure, "Resource does not exist.";
    default: "An unexpected error response";
};

/// All declared tables.
pub const ALL: &[&ResponseTable] = &[&DELETE_QUEUE, &DELETE_COMPONENT_HUB, &DELETE_AGENT];

/// Table of an operation, by operation id.
#[must_use]
pub fn by_operation(operation: &str) -> Option<&'static ResponseTable> {
    ALL.iter()
        .copied()
        .find(|table| table.endpoint().operation() == operation)
}

#[cfg(test)]
mod tests {
    use verdict_core::{Classification, PayloadShape};

    use super::*;

    #[test]
    fn delete_tables_share_the_contract() {
        for table in ALL {
            let codes: Vec<_> = table.declared_codes().collect();
            assert_eq!(codes, [200, 204, 403, 404], "{}", table.endpoint());

            let ok = table.entry(200).expect("200");
            assert_eq!(ok.shape, PayloadShape::Empty);
            assert_eq!(ok.classification, Classification::Success);

            for code in [403, 404] {
                let entry = table.entry(code).expect("declared");
                assert_eq!(entry.shape, PayloadShape::Opaque);
                assert_eq!(entry.classification, Classification::Failure);
            }
        }
    }

    #[test]
    fn lookup_by_operation() {
        let table = by_operation("DeleteComponentHub").expect("declared");
        assert_eq!(
            table.endpoint().path().as_str(),
            "/api/v1/orgs/{owner}/components/{uuid}"
        );
        assert!(by_operation("CreateQueue").is_none());
    }

    #[test]
    fn paths_have_owner_placeholder() {
        for table in ALL {
            let placeholders: Vec<_> = table.endpoint().path().placeholders().collect();
            assert_eq!(placeholders.first(), Some(&"owner"));
            assert_eq!(placeholders.last(), Some(&"uuid"));
        }
    }
}
