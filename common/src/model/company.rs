use serde::{Deserialize, Serialize};

/// A film company as returned by `GET /movieCompanies`.
///
/// The list is fetched once per refresh and replaced wholesale, so instances
/// are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(deserialize_with = "crate::model::id::deserialize")]
    pub id: String,
    pub name: String,
}
