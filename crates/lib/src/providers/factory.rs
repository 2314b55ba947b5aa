//! # Dynamic Summarizer Factory
//!
//! This module centralizes the logic for creating summarization backends.
//! By placing it in the `lib` crate, any consumer (CLI, tests, a future
//! server) leverages the same provider selection mechanism, ensuring
//! consistency.

use crate::{
    constants::HF_INFERENCE_API_URL,
    errors::SummarizeError,
    providers::summarize::{hf::HfProvider, local::LocalAiProvider, Summarizer},
};
use tracing::info;

/// Creates a summarization backend based on a model name.
///
/// Model names containing a `/` (e.g. `sshleifer/distilbart-cnn-12-6`) are
/// treated as Hugging Face Hub identifiers and routed to the Inference API,
/// with an optional bearer token from `HF_API_KEY`. Any other name selects
/// a local OpenAI-compatible server, whose URL must be provided via
/// `LOCAL_AI_API_URL`.
pub fn create_summarizer(model_name: &str) -> Result<Box<dyn Summarizer>, SummarizeError> {
    info!("Creating summarizer for model: '{model_name}'");

    let provider: Box<dyn Summarizer> = if model_name.contains('/') {
        let api_url = format!("{HF_INFERENCE_API_URL}/{model_name}");
        let api_key = std::env::var("HF_API_KEY").ok();
        info!("Configuring Hugging Face provider with URL: {api_url}");
        Box::new(HfProvider::new(api_url, api_key)?)
    } else {
        let api_url = std::env::var("LOCAL_AI_API_URL").map_err(|_| {
            SummarizeError::MissingApiUrl(
                "LOCAL_AI_API_URL must be set in .env to use a local model.".to_string(),
            )
        })?;
        let api_key = std::env::var("LOCAL_AI_API_KEY").ok();
        info!("Configuring Local AI provider with URL: {api_url}");
        Box::new(LocalAiProvider::new(
            api_url,
            api_key,
            Some(model_name.to_string()),
        )?)
    };

    Ok(provider)
}
