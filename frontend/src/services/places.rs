//! Fetching the exported places dataset.

use gloo_net::http::Request;

use crate::config::DATA_URL;
use crate::types::{AppError, AppResult, Dataset};

/// Fetch the dataset document.
///
/// Called once at startup; the result is cached in a resource for the
/// lifetime of the page. A changed dataset is only picked up by a reload,
/// which matches the deploy-time rebuild model.
pub async fn fetch_dataset() -> AppResult<Dataset> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Network(format!(
            "Server returned {} for {}",
            response.status(),
            DATA_URL
        )));
    }

    response
        .json::<Dataset>()
        .await
        .map_err(|e| AppError::Decode(format!("Invalid dataset: {}", e)))
}
