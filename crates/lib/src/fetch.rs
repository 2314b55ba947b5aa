//! # Pagination Loop
//!
//! This module fetches every page of a paginated API endpoint and
//! accumulates the raw records in API order. The loop is strictly
//! sequential: page N+1 is never requested before page N completes.

use crate::errors::FetchError;
use crate::types::PageResponse;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::{debug, info};

/// Fetches all pages of `base_url` and returns the accumulated raw records.
///
/// Pages are requested as `base_url?page=<n>` with a 1-based counter. An
/// empty record sequence on a page is the normal termination condition. Any
/// transport, parse, or format failure on any page aborts the whole fetch:
/// records accumulated from earlier pages are discarded, not returned
/// partially.
pub async fn fetch_all(client: &ReqwestClient, base_url: &str) -> Result<Vec<Value>, FetchError> {
    let mut all_records = Vec::new();
    let mut page: u32 = 1;

    loop {
        debug!("Fetching page {page} of {base_url}");
        let response = client
            .get(base_url)
            .query(&[("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        // Two distinct failure kinds: a body that is not JSON at all, and
        // valid JSON that lacks the `data.data` envelope. The format check
        // applies to every page, not only the first.
        let parsed: Value = serde_json::from_str(&body)?;
        let page_response: PageResponse =
            serde_json::from_value(parsed).map_err(|_| FetchError::Format)?;

        let page_records = page_response.data.data;
        if page_records.is_empty() {
            info!("Page {page} is empty, pagination complete: {} records", all_records.len());
            return Ok(all_records);
        }

        all_records.extend(page_records);
        page += 1;
    }
}
