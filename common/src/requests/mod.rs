use serde::{Deserialize, Serialize};

/// Body of `POST /submitReview`.
///
/// Built by the review form from the selected movie and the validated form
/// values, sent once and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub movie_id: String,
    pub movie_title: String,
    pub message: String,
    pub review: f64,
}

/// Success payload of `POST /submitReview`, shown as a transient banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfirmation {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_uses_wire_field_names() {
        let submission = ReviewSubmission {
            movie_id: "3".to_string(),
            movie_title: "Heat".to_string(),
            message: "Great".to_string(),
            review: 7.5,
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "movieId": "3",
                "movieTitle": "Heat",
                "message": "Great",
                "review": 7.5
            })
        );
    }
}
