// Fixed-dimension vector helpers for the feature space.
//
// The classifier works in a 4-dimensional space shared by the per-post
// feature vectors and the two reference vectors. Changing the keyword
// categories means resizing VECTOR_DIM and every constant built from it.

use anyhow::Result;

/// Dimensionality of feature and reference vectors.
pub const VECTOR_DIM: usize = 4;

/// A point in the classifier's feature space.
pub type FeatureVec = [f64; VECTOR_DIM];

/// Component-wise `acc += other`.
pub fn add_assign(acc: &mut FeatureVec, other: &FeatureVec) {
    for (a, b) in acc.iter_mut().zip(other.iter()) {
        *a += b;
    }
}

/// Euclidean norm.
pub fn norm(v: &FeatureVec) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scale to unit length. A zero vector is left untouched; it has no
/// direction to preserve.
pub fn normalize(v: &mut FeatureVec) {
    let n = norm(v);
    if n > 0.0 {
        for x in v.iter_mut() {
            *x /= n;
        }
    }
}

/// Engagement-weighted arithmetic mean of feature vectors, component-wise:
/// `sum(weight_i * vector_i) / sum(weight_i)`.
///
/// The slices are parallel: `weights[i]` belongs to `vectors[i]`. Weights
/// are used as given; negative weights are legal as long as the total is
/// nonzero. A zero weight sum is an error: dividing through would silently
/// produce non-finite components, so the caller gets a message to carry
/// instead.
pub fn weighted_mean(vectors: &[FeatureVec], weights: &[f64]) -> Result<FeatureVec> {
    let weight_sum: f64 = weights.iter().sum();
    if weight_sum == 0.0 {
        anyhow::bail!("Engagement weights sum to zero, cannot average feature vectors");
    }

    let mut mean = [0.0; VECTOR_DIM];
    for (vec, &w) in vectors.iter().zip(weights.iter()) {
        for (m, &x) in mean.iter_mut().zip(vec.iter()) {
            *m += w * x;
        }
    }
    for m in mean.iter_mut() {
        *m /= weight_sum;
    }

    Ok(mean)
}

/// Cosine similarity: `dot(a, b) / (||a|| * ||b||)`.
///
/// A zero denominator is substituted with 1 rather than short-circuiting,
/// so a zero-norm vector scores 0 against anything (its dot product is
/// already 0). The result is NOT clamped: opposed vectors legitimately
/// score -1, and the bucketing depends on that full [-1, 1] range.
pub fn cosine_similarity(a: &FeatureVec, b: &FeatureVec) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        dot
    } else {
        dot / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assign_accumulates() {
        let mut acc = [1.0, 0.0, -1.0, 0.5];
        add_assign(&mut acc, &[0.5, 0.5, 0.5, 0.5]);
        assert_eq!(acc, [1.5, 0.5, -0.5, 1.0]);
    }

    #[test]
    fn test_norm_zero_vector() {
        assert_eq!(norm(&[0.0; VECTOR_DIM]), 0.0);
    }

    #[test]
    fn test_normalize_produces_unit_length() {
        let mut v = [3.0, 0.0, 4.0, 0.0];
        normalize(&mut v);
        assert!((norm(&v) - 1.0).abs() < 1e-12, "Expected unit norm, got {}", norm(&v));
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[2] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_leaves_zero_vector() {
        let mut v = [0.0; VECTOR_DIM];
        normalize(&mut v);
        assert_eq!(v, [0.0; VECTOR_DIM]);
    }

    #[test]
    fn test_weighted_mean_equal_weights_is_mean() {
        let vectors = [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]];
        let mean = weighted_mean(&vectors, &[1.0, 1.0]).unwrap();
        assert!((mean[0] - 0.5).abs() < 1e-12);
        assert!((mean[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_heavier_weight_dominates() {
        let vectors = [[1.0, 0.0, 0.0, 0.0], [-1.0, 0.0, 0.0, 0.0]];
        let mean = weighted_mean(&vectors, &[3.0, 1.0]).unwrap();
        // (3*1 + 1*-1) / 4 = 0.5
        assert!((mean[0] - 0.5).abs() < 1e-12, "Expected 0.5, got {}", mean[0]);
    }

    #[test]
    fn test_weighted_mean_zero_weight_sum_errors() {
        let vectors = [[1.0, 0.0, 0.0, 0.0]];
        let result = weighted_mean(&vectors, &[0.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_weighted_mean_cancelling_weights_error() {
        let vectors = [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]];
        let result = weighted_mean(&vectors, &[2.0, -2.0]);
        assert!(result.is_err(), "Weights cancelling to zero should error");
    }

    #[test]
    fn test_weighted_mean_negative_total_is_accepted() {
        let vectors = [[1.0, 0.0, 0.0, 0.0]];
        let mean = weighted_mean(&vectors, &[-5.0]).unwrap();
        // (-5 * 1) / -5 = 1
        assert!((mean[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_identical() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_opposed_is_minus_one() {
        // Unlike a clamped cosine, opposed vectors must score -1 here;
        // the hype-minus-fud spread relies on it.
        let a = [1.0, 0.8, 0.9, 0.7];
        let b = [-1.0, -0.8, -0.9, -0.7];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_scores_zero() {
        let zero = [0.0; VECTOR_DIM];
        let b = [1.0, 0.8, 0.9, 0.7];
        // Denominator substitution: 0 / 1 rather than 0 / 0
        assert_eq!(cosine_similarity(&zero, &b), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = [1.0, 3.0, -2.0, 0.5];
        let b = [2.0, -1.0, 4.0, 0.0];
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_scale_invariant() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }
}
