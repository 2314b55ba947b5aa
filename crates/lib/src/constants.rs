//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared
//! across the `citepress` workspace. Using these constants helps to avoid
//! "magic numbers" and ensures the pipeline and its consumers stay in sync.

/// The maximum number of records a pipeline run will normalize.
///
/// Truncation happens before validation, so records past this window are
/// never inspected or summarized.
pub const RESULT_WINDOW: usize = 5;

/// The lower bound on summary length passed to every summarization call.
pub const SUMMARY_MIN_LENGTH: u32 = 30;

/// The upper bound on summary length passed to every summarization call.
pub const SUMMARY_MAX_LENGTH: u32 = 60;

/// The default summarization model when none is configured.
pub const DEFAULT_SUMMARY_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// The base URL of the Hugging Face Inference API.
pub const HF_INFERENCE_API_URL: &str = "https://api-inference.huggingface.co/models";

/// The default API endpoint offered by the CLI.
pub const DEFAULT_API_URL: &str = "https://devapi.beyondchats.com/api/get_message_with_sources";

/// The file the CLI writes display rows to after a successful run.
pub const DEFAULT_CACHE_FILE: &str = "cached_data.json";
