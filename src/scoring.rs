// Hype classification — the weighted-aggregate scoring pipeline.
//
// Per-post feature vectors are engagement-weighted into a single aggregate,
// which is scored by cosine similarity against the hype and FUD reference
// vectors. The spread between the two similarities lands in one of four
// buckets. Anything that goes wrong mid-pipeline degrades to a neutral
// result carrying the failure as data; classification never returns an
// error to its caller.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::{self, FUD_REFERENCE, HYPE_REFERENCE};
use crate::posts::PostRecord;
use crate::vector::{self, FeatureVec};

/// Hype bucket for a batch of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypeLevel {
    Neutral,
    Low,
    Medium,
    High,
}

impl HypeLevel {
    /// Bucket a hype-minus-FUD spread (≈ -2 to 2).
    ///
    /// Arms are evaluated top to bottom and the ordering is part of the
    /// contract. The buckets are asymmetric: everything below -0.5 is
    /// `Low`, with no deeper bucket however far negative the spread goes.
    /// NaN fails every comparison and lands in `Neutral`.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > 0.5 => HypeLevel::High,
            s if s > 0.0 => HypeLevel::Medium,
            s if s < -0.5 => HypeLevel::Low,
            _ => HypeLevel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HypeLevel::Neutral => "neutral",
            HypeLevel::Low => "low",
            HypeLevel::Medium => "medium",
            HypeLevel::High => "high",
        }
    }
}

impl std::fmt::Display for HypeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification outcome for one batch of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub hype_level: HypeLevel,
    /// Magnitude of the hype-minus-FUD spread. Each similarity is in
    /// [-1, 1], so this can reach 2.0 and is reported as computed, not
    /// clamped to [0, 1].
    pub confidence: f64,
    /// Present only when classification degraded to the neutral fallback.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl Classification {
    /// The neutral result: empty input, or a batch with no signal.
    pub fn neutral() -> Self {
        Self {
            hype_level: HypeLevel::Neutral,
            confidence: 0.0,
            error: None,
        }
    }

    /// The fail-safe fallback: neutral, with the failure carried as data.
    pub fn degraded(message: String) -> Self {
        Self {
            hype_level: HypeLevel::Neutral,
            confidence: 0.0,
            error: Some(message),
        }
    }
}

/// Classify a batch of posts into a hype bucket.
///
/// Empty input short-circuits to the neutral result. Any failure inside
/// the pipeline (a zero engagement-weight sum is the reachable case) is
/// converted into the neutral fallback with an `error` message.
pub fn classify(posts: &[PostRecord]) -> Classification {
    if posts.is_empty() {
        return Classification::neutral();
    }

    match classify_inner(posts) {
        Ok(result) => result,
        Err(e) => Classification::degraded(format!("{e:#}")),
    }
}

fn classify_inner(posts: &[PostRecord]) -> Result<Classification> {
    let vectors: Vec<FeatureVec> = posts
        .iter()
        .map(|p| lexicon::feature_vector(&p.text))
        .collect();
    let weights: Vec<f64> = posts.iter().map(|p| p.engagements).collect();

    let aggregate = vector::weighted_mean(&vectors, &weights)?;

    let sim_hype = vector::cosine_similarity(&aggregate, &HYPE_REFERENCE);
    let sim_fud = vector::cosine_similarity(&aggregate, &FUD_REFERENCE);
    let score = sim_hype - sim_fud;

    debug!(
        posts = posts.len(),
        sim_hype, sim_fud, score, "Scored aggregate vector"
    );

    Ok(Classification {
        hype_level: HypeLevel::from_score(score),
        confidence: score.abs(),
        error: None,
    })
}
