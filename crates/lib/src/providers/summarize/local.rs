use crate::{
    errors::SummarizeError,
    providers::summarize::{Summarizer, SummaryOptions},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct LocalAiRequest<'a> {
    messages: Vec<LocalAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    max_tokens: i32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct LocalAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct LocalAiResponse {
    choices: Vec<LocalAiChoice>,
}

#[derive(Deserialize, Debug)]
struct LocalAiChoice {
    message: LocalAiMessage,
}

// --- Local Provider implementation ---

/// A summarization provider for a local or OpenAI-compatible API.
///
/// Chat endpoints have no native length-bound parameters, so the bounds are
/// carried in the system prompt and `max_tokens`; `temperature` is pinned to
/// zero to keep the output deterministic.
#[derive(Clone, Debug)]
pub struct LocalAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl LocalAiProvider {
    /// Creates a new `LocalAiProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, SummarizeError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(SummarizeError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl Summarizer for LocalAiProvider {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError> {
        let system_prompt = format!(
            "You are a text summarizer. Condense the user's text into a summary between {} and {} words. Your only output is the summary itself. Do not add any explanations, introductory text, or markdown formatting.",
            options.min_length, options.max_length
        );
        let messages = vec![
            LocalAiMessage {
                role: "system".to_string(),
                content: system_prompt,
            },
            LocalAiMessage {
                role: "user".to_string(),
                content: text.to_string(),
            },
        ];

        let request_body = LocalAiRequest {
            messages,
            model: self.model.as_deref(),
            temperature: 0.0,
            max_tokens: options.max_length as i32 * 4,
            stream: false,
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

        let local_ai_response: LocalAiResponse = response
            .json()
            .await
            .map_err(SummarizeError::Deserialization)?;

        local_ai_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(SummarizeError::EmptySummary)
    }
}
