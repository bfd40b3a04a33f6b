// Post record ingestion — parsing the stdin JSON payload.
//
// The input is a JSON array of post objects (or `null`, which counts as an
// empty batch). Both fields are optional: missing `text` is an empty
// string, missing `engagements` counts as a single engagement. Unknown
// fields are ignored so callers can pass through richer post objects.

use anyhow::{Context, Result};
use serde::Deserialize;

/// A single post to classify — just the fields the classifier needs.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    /// Post body. Keyword matching is substring-based on the lower-cased text.
    #[serde(default)]
    pub text: String,
    /// Engagement count (likes, replies, reposts) used as the aggregation
    /// weight. Accepted as given: zero and negative values are not clamped.
    #[serde(default = "default_engagements")]
    pub engagements: f64,
}

fn default_engagements() -> f64 {
    1.0
}

/// Parse the raw stdin payload into post records.
///
/// Surrounding whitespace is trimmed first. Anything that is not `null` or
/// an array of post objects is a parse error; the caller reports it and
/// exits non-zero.
pub fn parse_posts(raw: &str) -> Result<Vec<PostRecord>> {
    let posts: Option<Vec<PostRecord>> = serde_json::from_str(raw.trim())
        .context("Input is not a JSON array of post objects")?;
    Ok(posts.unwrap_or_default())
}
