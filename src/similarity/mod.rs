//! Similarity schemes: scalar relevance between a query vector and a
//! document vector.

use crate::document::VectorizedDocument;

/// Computes a relevance score between two vectorized documents.
///
/// Higher does not have to mean "more similar" for custom schemes; the
/// ranker only relies on the scores forming a consistent ordering.
pub trait SimilarityScheme {
    fn score(&self, a: &VectorizedDocument, b: &VectorizedDocument) -> f64;
}

/// Cosine similarity: dot product divided by the product of Euclidean
/// lengths, measuring angular closeness independent of magnitude.
///
/// A zero-length vector on either side scores `0.0` ("no similarity") so a
/// NaN never reaches the ranking sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosineSimilarity;

impl SimilarityScheme for CosineSimilarity {
    fn score(&self, a: &VectorizedDocument, b: &VectorizedDocument) -> f64 {
        let denom = a.vector.euclidean_length() * b.vector.euclidean_length();
        if denom == 0.0 {
            return 0.0;
        }
        a.vector.dot_product(&b.vector) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{TermVector, VectorizedDocument};

    fn doc_of(pairs: &[(&str, f64)]) -> VectorizedDocument {
        let mut vector = TermVector::new();
        for (term, weight) in pairs {
            vector.set_weight(term, *weight);
        }
        VectorizedDocument {
            vector,
            content: String::new(),
            meta: None,
        }
    }

    #[test]
    fn identical_vectors_score_one() {
        let a = doc_of(&[("x", 3.0), ("y", 4.0)]);
        let score = CosineSimilarity.score(&a, &a);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn is_symmetric() {
        let a = doc_of(&[("x", 1.0), ("y", 2.0)]);
        let b = doc_of(&[("y", 5.0), ("z", 1.0)]);
        let ab = CosineSimilarity.score(&a, &b);
        let ba = CosineSimilarity.score(&b, &a);
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = doc_of(&[("x", 1.0)]);
        let b = doc_of(&[("y", 1.0)]);
        assert_eq!(CosineSimilarity.score(&a, &b), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero_not_nan() {
        let a = doc_of(&[]);
        let b = doc_of(&[("x", 1.0)]);
        let score = CosineSimilarity.score(&a, &b);
        assert_eq!(score, 0.0);
        assert!(!CosineSimilarity.score(&a, &a).is_nan());
    }

    #[test]
    fn magnitude_independent() {
        let a = doc_of(&[("x", 1.0), ("y", 1.0)]);
        let b = doc_of(&[("x", 10.0), ("y", 10.0)]);
        let score = CosineSimilarity.score(&a, &b);
        assert!((score - 1.0).abs() < 1e-12);
    }
}
