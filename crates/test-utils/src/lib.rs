//! # Shared Test Utilities
//!
//! Helpers shared across the workspace's integration tests: a deterministic
//! mock summarizer and a wiremock helper that serves a paginated API.

use async_trait::async_trait;
use citepress::{SummarizeError, Summarizer, SummaryOptions};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// --- Mock Summarizer ---

/// A deterministic in-memory summarizer that records every call.
///
/// The output is a pure function of the input text, which makes it suitable
/// for asserting the pipeline's determinism contract.
#[derive(Clone, Debug, Default)]
pub struct MockSummarizer {
    calls: Arc<Mutex<Vec<(String, SummaryOptions)>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, SummaryOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((text.to_string(), *options));
        Ok(format!("summary of: {text}"))
    }
}

// --- Paged API mocking ---

/// Mounts the given pages on `server` under `/api`, each page keyed by its
/// 1-based `page` query parameter, followed by the empty page that
/// terminates pagination.
pub async fn mount_paged_api(server: &MockServer, pages: &[Vec<Value>]) {
    for (i, records) in pages.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("page", (i + 1).to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "data": records } })),
            )
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("page", (pages.len() + 1).to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "data": [] } })))
        .mount(server)
        .await;
}
