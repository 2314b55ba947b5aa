use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the pagination loop.
///
/// All three payload-related variants are terminal for the whole run: once a
/// page fails, any records accumulated from earlier pages are discarded.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to send request to the API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch data: {0}")]
    Status(StatusCode),
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected data format: missing `data.data` in page payload")]
    Format,
}

/// Errors raised by a summarization backend.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the summarization API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize summarization API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Summarization API returned an error: {0}")]
    Api(String),
    #[error("Summarization API returned no summary text")]
    EmptySummary,
    #[error("Summarizer API URL is missing: {0}")]
    MissingApiUrl(String),
    #[error("No summarization backend is configured")]
    MissingSummarizer,
}

/// The terminal error of a pipeline run.
///
/// Record-level and citation-level shape anomalies never reach this type;
/// they are skipped where they occur.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}
