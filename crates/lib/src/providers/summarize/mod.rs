pub mod hf;
pub mod local;

use crate::constants::{SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH};
use crate::errors::SummarizeError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::Serialize;
use std::fmt::Debug;

/// The decoding configuration passed to every summarization call.
///
/// The pipeline always invokes backends with explicit bounds and sampling
/// disabled, so repeated calls on identical input are expected to be stable.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub min_length: u32,
    pub max_length: u32,
    pub sample: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_length: SUMMARY_MIN_LENGTH,
            max_length: SUMMARY_MAX_LENGTH,
            sample: false,
        }
    }
}

/// A trait for interacting with a summarization backend.
///
/// This defines a common interface for condensing long-form text using
/// different backends (e.g., the Hugging Face Inference API, a local
/// OpenAI-compatible server). Backends are treated as black boxes beyond
/// this contract: given input text and options, they return a shorter text.
#[async_trait]
pub trait Summarizer: Send + Sync + Debug + DynClone {
    /// Produces a summary of `text` respecting the length bounds in
    /// `options`. Implementations must honor `sample: false` by using
    /// deterministic decoding.
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, SummarizeError>;
}

dyn_clone::clone_trait_object!(Summarizer);
