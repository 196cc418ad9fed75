//! Remote data client for the catalog API.
//!
//! The two list operations return a typed [`FetchError`] so the catalog can
//! show an error view. Review submission only logs its failures and hands
//! back `None`; the user simply never sees a confirmation.

use common::error::{decode_list, FetchError, Resource};
use common::model::company::Company;
use common::model::movie::Movie;
use common::requests::{ReviewConfirmation, ReviewSubmission};
use gloo_console::error;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::api_base_url;

const COMPANIES_PATH: &str = "movieCompanies";
const MOVIES_PATH: &str = "movies";
const SUBMIT_REVIEW_PATH: &str = "submitReview";

/// Joins `base` and `path` with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub async fn list_companies() -> Result<Vec<Company>, FetchError> {
    get_list(Resource::Companies, COMPANIES_PATH).await
}

pub async fn list_movies() -> Result<Vec<Movie>, FetchError> {
    get_list(Resource::Movies, MOVIES_PATH).await
}

pub async fn submit_review(submission: &ReviewSubmission) -> Option<ReviewConfirmation> {
    match post_review(submission).await {
        Ok(confirmation) => Some(confirmation),
        Err(reason) => {
            error!("Request Failed: unable to submit review.", reason);
            None
        }
    }
}

async fn get_list<T: DeserializeOwned>(
    resource: Resource,
    path: &str,
) -> Result<Vec<T>, FetchError> {
    let result = fetch_list(resource, &endpoint(api_base_url(), path)).await;
    if let Err(err) = &result {
        error!("Request Failed", err.to_string());
    }
    result
}

async fn fetch_list<T: DeserializeOwned>(
    resource: Resource,
    url: &str,
) -> Result<Vec<T>, FetchError> {
    let network = |err: gloo_net::Error| FetchError::Network {
        resource,
        reason: err.to_string(),
    };

    let response = Request::get(url).send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;

    decode_list(resource, status, &body)
}

async fn post_review(submission: &ReviewSubmission) -> Result<ReviewConfirmation, String> {
    let url = endpoint(api_base_url(), SUBMIT_REVIEW_PATH);
    let response = Request::post(&url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .json(submission)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        return Err(format!("server answered {}", response.status()));
    }

    response
        .json::<ReviewConfirmation>()
        .await
        .map_err(|err| err.to_string())
}
