//! Weighing schemes: rescale a batch of raw-count vectors into weighted
//! vectors over the shared dictionary.

pub mod tfidf;

pub use tfidf::TfIdf;

use crate::document::VectorizedDocument;
use crate::vectorize::Dictionary;

/// Transforms the batch of raw-count vectors into weighted vectors.
///
/// Contract: the returned batch has the same cardinality and, per document,
/// the same key set as the input; only the numeric values change. The batch
/// handed in is the whole comparison set, query pseudo-document included.
pub trait WeighingScheme {
    fn weigh(
        &self,
        batch: Vec<VectorizedDocument>,
        dictionary: &Dictionary,
    ) -> Vec<VectorizedDocument>;
}

/// Leaves raw occurrence counts in place; the default when no weighing
/// scheme is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCount;

impl WeighingScheme for RawCount {
    fn weigh(
        &self,
        batch: Vec<VectorizedDocument>,
        _dictionary: &Dictionary,
    ) -> Vec<VectorizedDocument> {
        batch
    }
}
