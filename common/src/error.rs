//! Error taxonomy for the two list resources.
//!
//! Only the list fetches produce typed errors. Review submission failures are
//! logged where they happen and never reach application state.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// One of the list endpoints tracked with its own fetch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Companies,
    Movies,
}

impl Resource {
    /// Stable lowercase name used in log lines and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Movies => "movies",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Failure to load a list resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("unable to fetch {resource}: server answered {status}")]
    Status { resource: Resource, status: u16 },
    /// The request never produced a response.
    #[error("unable to fetch {resource}: {reason}")]
    Network { resource: Resource, reason: String },
    /// The response body was not the expected JSON.
    #[error("unable to decode {resource}: {reason}")]
    Decode { resource: Resource, reason: String },
}

impl FetchError {
    #[must_use]
    pub const fn resource(&self) -> Resource {
        match self {
            Self::Status { resource, .. }
            | Self::Network { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}

/// Maps an HTTP status to success (any 2xx) or a [`FetchError::Status`].
pub fn check_status(resource: Resource, status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status { resource, status })
    }
}

/// Turns a list endpoint's status and body into its snapshot.
pub fn decode_list<T: DeserializeOwned>(
    resource: Resource,
    status: u16,
    body: &str,
) -> Result<Vec<T>, FetchError> {
    check_status(resource, status)?;
    serde_json::from_str(body).map_err(|err| FetchError::Decode {
        resource,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::company::Company;

    #[rstest]
    #[case(200)]
    #[case(204)]
    #[case(299)]
    fn accepts_success_statuses(#[case] status: u16) {
        assert_eq!(check_status(Resource::Movies, status), Ok(()));
    }

    #[rstest]
    #[case(199)]
    #[case(304)]
    #[case(404)]
    #[case(500)]
    fn rejects_other_statuses(#[case] status: u16) {
        let error = check_status(Resource::Companies, status).unwrap_err();
        assert_eq!(error.resource(), Resource::Companies);
        assert_eq!(
            error.to_string(),
            format!("unable to fetch companies: server answered {status}")
        );
    }

    #[test]
    fn decodes_list_body_on_success() {
        let companies: Vec<Company> =
            decode_list(Resource::Companies, 200, r#"[{"id":1,"name":"Pixar"}]"#).unwrap();
        assert_eq!(companies, [Company { id: "1".to_string(), name: "Pixar".to_string() }]);
    }

    #[test]
    fn error_status_wins_over_body() {
        let result = decode_list::<Company>(Resource::Companies, 503, r#"[]"#);
        assert_eq!(result, Err(FetchError::Status { resource: Resource::Companies, status: 503 }));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let error = decode_list::<Company>(Resource::Movies, 200, "<html>").unwrap_err();
        assert!(matches!(error, FetchError::Decode { resource: Resource::Movies, .. }));
    }
}
