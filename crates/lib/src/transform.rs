//! # Record Normalization
//!
//! This module turns one raw record into a `NormalizedRecord` by
//! summarizing each citation's long-form context. Shape anomalies follow a
//! single policy everywhere in the nested traversal: the offending unit is
//! skipped with a logged reason and never escalates to a pipeline error.

use crate::errors::SummarizeError;
use crate::providers::summarize::{Summarizer, SummaryOptions};
use crate::types::{NormalizedCitation, NormalizedRecord};
use serde_json::Value;
use tracing::{debug, warn};

/// Normalizes a single raw record, or returns `None` when the record's
/// shape disqualifies it.
///
/// A record is skipped when it is not an object, or when its `source` field
/// is present but not an array. Within a valid record, citations with empty
/// or absent `context` are dropped, and a citation without an `id` is
/// dropped with a warning. Citation order is preserved. Only a failure of
/// the summarization backend itself is returned as an error.
pub async fn normalize_record(
    record: &Value,
    summarizer: &dyn Summarizer,
    options: &SummaryOptions,
) -> Result<Option<NormalizedRecord>, SummarizeError> {
    let Some(fields) = record.as_object() else {
        debug!("Skipping record with unexpected format: not an object");
        return Ok(None);
    };

    let response_text = fields
        .get("response")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let raw_citations = match fields.get("source") {
        None => &[] as &[Value],
        Some(Value::Array(citations)) => citations.as_slice(),
        Some(_) => {
            debug!("Skipping record with unexpected source format: not an array");
            return Ok(None);
        }
    };

    let mut source = Vec::new();
    for citation in raw_citations {
        if let Some(normalized) = normalize_citation(citation, summarizer, options).await? {
            source.push(normalized);
        }
    }

    Ok(Some(NormalizedRecord {
        response: response_text,
        source,
    }))
}

/// Summarizes one citation's context, or returns `None` when the citation
/// is dropped.
async fn normalize_citation(
    citation: &Value,
    summarizer: &dyn Summarizer,
    options: &SummaryOptions,
) -> Result<Option<NormalizedCitation>, SummarizeError> {
    let Some(fields) = citation.as_object() else {
        warn!("Skipping citation with unexpected format: not an object");
        return Ok(None);
    };

    let context = fields
        .get("context")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if context.is_empty() {
        return Ok(None);
    }

    let Some(id) = fields.get("id") else {
        warn!("Skipping citation without an `id` field");
        return Ok(None);
    };

    let link = fields
        .get("link")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let summary = summarizer.summarize(context, options).await?;

    Ok(Some(NormalizedCitation {
        id: id.clone(),
        context: summary,
        link,
    }))
}
