// Fixed keyword lexicon and reference vectors.
//
// There are no learned embeddings here. Each sentiment category is a
// hand-picked list of lowercase substrings plus a fixed reference vector,
// and a post's feature vector is just the sum of the reference vectors of
// whatever it matched. Matching is substring-based, not word-boundary
// based: "scammed" counts as "scam", "tothemoon" also counts as "moon".

use crate::vector::{self, FeatureVec};

/// Reference direction for bullish/promotional chatter.
pub const HYPE_REFERENCE: FeatureVec = [1.0, 0.8, 0.9, 0.7];

/// Reference direction for fear/uncertainty/doubt. Exact mirror of
/// `HYPE_REFERENCE`.
pub const FUD_REFERENCE: FeatureVec = [-1.0, -0.8, -0.9, -0.7];

/// Substrings that signal hype, matched against lower-cased post text.
pub const HYPE_KEYWORDS: [&str; 6] = ["moon", "pump", "viral", "tothemoon", "bullish", "buy"];

/// Substrings that signal FUD.
pub const FUD_KEYWORDS: [&str; 6] = ["dump", "rug", "scam", "crash", "bearish", "sell"];

/// Derive a post's feature vector from keyword presence.
///
/// Every hype keyword found in the lower-cased text adds `HYPE_REFERENCE`;
/// every FUD keyword adds `FUD_REFERENCE`. Matches compound additively:
/// a post hitting three hype keywords accumulates the hype direction three
/// times, and mixed matches pull against each other. The result is
/// unit-normalized unless nothing matched (or the matches cancelled), in
/// which case it stays the zero vector.
pub fn feature_vector(text: &str) -> FeatureVec {
    let lower = text.to_lowercase();

    let mut vec = [0.0; vector::VECTOR_DIM];
    for keyword in HYPE_KEYWORDS {
        if lower.contains(keyword) {
            vector::add_assign(&mut vec, &HYPE_REFERENCE);
        }
    }
    for keyword in FUD_KEYWORDS {
        if lower.contains(keyword) {
            vector::add_assign(&mut vec, &FUD_REFERENCE);
        }
    }

    vector::normalize(&mut vec);
    vec
}
