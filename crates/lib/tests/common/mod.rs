#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the integration tests: tracing setup, a deterministic
//! mock summarizer, and a wiremock helper for paginated API responses.

use async_trait::async_trait;
use citepress::{SummarizeError, Summarizer, SummaryOptions};
use serde_json::{json, Value};
use std::sync::{Arc, Once, RwLock};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock Summarizer for Logic Testing ---

/// A deterministic in-memory summarizer that records every call.
#[derive(Clone, Debug, Default)]
pub struct MockSummarizer {
    pub call_history: Arc<RwLock<Vec<(String, SummaryOptions)>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> Vec<(String, SummaryOptions)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError> {
        self.call_history
            .write()
            .unwrap()
            .push((text.to_string(), *options));
        Ok(format!("summary of: {text}"))
    }
}

// --- Paged API mocking ---

/// Mounts one page of records on the mock server, plus a terminating empty
/// page right after the last one.
pub async fn mount_pages(server: &MockServer, pages: &[Vec<Value>]) {
    for (i, records) in pages.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("page", (i + 1).to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "data": records } })),
            )
            .expect(1)
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("page", (pages.len() + 1).to_string()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "data": [] } })),
        )
        .expect(1)
        .mount(server)
        .await;
}
