use crate::errors::SummarizeError;
use crate::providers::summarize::{Summarizer, SummaryOptions};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// --- Page envelope ---

/// The decoded payload of one fetch call.
///
/// The upstream API wraps each page's records in a doubly-nested `data`
/// envelope. Decoding a parsed `Value` into this type is the explicit
/// format check: a payload missing either level fails here, which is a
/// different failure kind from the body not being JSON at all.
#[derive(Deserialize, Debug)]
pub struct PageResponse {
    pub data: PageEnvelope,
}

/// The inner `data` level of a page payload.
#[derive(Deserialize, Debug)]
pub struct PageEnvelope {
    pub data: Vec<Value>,
}

// --- Normalized output ---

/// A citation whose long-form context has been condensed.
///
/// Only citations with non-empty context are normalized, so `context` is
/// always a non-empty summary. The `id` is kept as an opaque `Value`
/// because the upstream API is free to send numbers or strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NormalizedCitation {
    pub id: Value,
    pub context: String,
    #[serde(default)]
    pub link: String,
}

/// One record of the result set: the original response text with its
/// summarized citations, in API order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub response: String,
    pub source: Vec<NormalizedCitation>,
}

// --- Pipeline client ---

/// A client that fetches paginated records and condenses their citations.
///
/// The summarization backend is loaded once when the pipeline is built and
/// reused for every citation across every `process` call.
pub struct Pipeline {
    pub(crate) http_client: ReqwestClient,
    pub(crate) summarizer: Box<dyn Summarizer>,
    pub(crate) summary_options: SummaryOptions,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("summarizer", &self.summarizer)
            .field("summary_options", &self.summary_options)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `Pipeline` instances.
///
/// This builder facilitates the creation of a `Pipeline` by allowing the
/// summarization backend and decoding options to be configured before the
/// HTTP client is constructed.
#[derive(Default)]
pub struct PipelineBuilder {
    summarizer: Option<Box<dyn Summarizer>>,
    summary_options: Option<SummaryOptions>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the summarization backend.
    pub fn summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Overrides the default summary length bounds.
    pub fn summary_options(mut self, options: SummaryOptions) -> Self {
        self.summary_options = Some(options);
        self
    }

    /// Builds the `Pipeline`.
    ///
    /// This method consumes the builder and returns a `Result` containing
    /// either a configured `Pipeline` or a `SummarizeError` if the
    /// configuration is incomplete or the HTTP client cannot be built.
    pub fn build(self) -> Result<Pipeline, SummarizeError> {
        let summarizer = self.summarizer.ok_or(SummarizeError::MissingSummarizer)?;

        let http_client = ReqwestClient::builder()
            .build()
            .map_err(SummarizeError::ReqwestClientBuild)?;

        Ok(Pipeline {
            http_client,
            summarizer,
            summary_options: self.summary_options.unwrap_or_default(),
        })
    }
}
