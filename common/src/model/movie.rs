use serde::{Deserialize, Serialize};

/// A movie row as returned by `GET /movies`.
///
/// `reviews` holds every rating the server knows about, oldest first. The
/// client only reads it; a freshly submitted review shows up after the next
/// refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(deserialize_with = "crate::model::id::deserialize")]
    pub id: String,
    pub title: String,
    pub cost: f64,
    pub release_year: i32,
    /// Foreign key into the company list.
    #[serde(deserialize_with = "crate::model::id::deserialize")]
    pub film_company_id: String,
    #[serde(default)]
    pub reviews: Vec<f64>,
}
