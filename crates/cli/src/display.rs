//! # Display Rows & Persistence
//!
//! Flattens normalized records into user-facing rows and writes them to the
//! cache file. The "first record only" views live here, never in the core
//! pipeline, which always returns the whole result set.

use anyhow::Result;
use citepress::NormalizedRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// One row of the output table: the response text with its citations
/// flattened into a single descriptive string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DisplayRow {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Source")]
    pub source: String,
}

/// Flattens the first normalized record into a table row.
pub fn build_rows(results: &[NormalizedRecord]) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    if let Some(first) = results.first() {
        let source = first
            .source
            .iter()
            .map(|c| format!("'id': {}, 'context': {}, 'link': {}", c.id, c.context, c.link))
            .collect::<Vec<_>>()
            .join(", ");
        rows.push(DisplayRow {
            response: first.response.clone(),
            source,
        });
    }
    rows
}

/// An `{id, link}` pair for the citations-with-links view, without the
/// summarized context.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LinkedCitation {
    pub id: Value,
    pub link: String,
}

/// Returns the first record's citations that carry a non-empty link.
pub fn linked_citations(results: &[NormalizedRecord]) -> Vec<LinkedCitation> {
    results
        .first()
        .map(|record| {
            record
                .source
                .iter()
                .filter(|c| !c.link.is_empty())
                .map(|c| LinkedCitation {
                    id: c.id.clone(),
                    link: c.link.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Writes the display rows to `path` as JSON.
///
/// This is a best-effort cache write: no read-back, no versioning, no
/// atomicity. The caller decides whether a failure is worth reporting.
pub fn persist_rows(path: &Path, rows: &[DisplayRow]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(file, rows)?;
    Ok(())
}
