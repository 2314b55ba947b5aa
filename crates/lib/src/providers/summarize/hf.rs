use crate::{
    errors::SummarizeError,
    providers::summarize::{Summarizer, SummaryOptions},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// --- Inference API request and response structures ---

#[derive(Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Serialize)]
struct HfParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Deserialize, Debug)]
struct HfSummary {
    summary_text: String,
}

// --- Hugging Face Provider implementation ---

/// A summarization provider backed by the Hugging Face Inference API.
///
/// The API accepts the length bounds and sampling flag directly, so the
/// pipeline's fixed configuration maps onto the wire format one-to-one.
#[derive(Clone, Debug)]
pub struct HfProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl HfProvider {
    /// Creates a new `HfProvider` for a full model URL, e.g.
    /// `https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6`.
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, SummarizeError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(SummarizeError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl Summarizer for HfProvider {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError> {
        let request_body = HfRequest {
            inputs: text,
            parameters: HfParameters {
                min_length: options.min_length,
                max_length: options.max_length,
                do_sample: options.sample,
            },
        };

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(SummarizeError::Request)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api(error_text));
        }

        let summaries: Vec<HfSummary> = response
            .json()
            .await
            .map_err(SummarizeError::Deserialization)?;

        summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or(SummarizeError::EmptySummary)
    }
}
