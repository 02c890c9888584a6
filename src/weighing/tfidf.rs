use indexmap::IndexMap;

use crate::document::VectorizedDocument;
use crate::vectorize::Dictionary;
use crate::weighing::WeighingScheme;

/// Textbook tf-idf weighing.
///
/// For every dimension `d` of the dictionary:
/// - `df(d)` is the number of batch documents whose vector key set contains
///   `d` (membership, not value, is the signal);
/// - `idf(d) = ln(batch_len / df(d))`;
/// - each document's new weight for `d` is `idf(d)` times its raw count.
///
/// The idf table is computed from the unweighted batch before any value is
/// rewritten, so document frequencies never observe partial updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdf;

impl WeighingScheme for TfIdf {
    fn weigh(
        &self,
        batch: Vec<VectorizedDocument>,
        dictionary: &Dictionary,
    ) -> Vec<VectorizedDocument> {
        let batch_len = batch.len() as f64;
        let mut idf: IndexMap<String, f64> = IndexMap::with_capacity(dictionary.len());
        for term in dictionary.iter() {
            let df = batch
                .iter()
                .filter(|doc| doc.vector.contains_term(term))
                .count();
            // df == 0 only happens with a stale dictionary; weight such a
            // dimension zero instead of dividing by zero
            let weight = if df == 0 {
                0.0
            } else {
                (batch_len / df as f64).ln()
            };
            idf.insert(term.to_string(), weight);
        }

        batch
            .into_iter()
            .map(|doc| {
                let vector = doc
                    .vector
                    .map_weights(|term, count| idf.get(term).copied().unwrap_or(0.0) * count);
                VectorizedDocument { vector, ..doc }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RawDocument;
    use crate::mapper::Identity;
    use crate::vectorize::vectorize_batch;

    fn weigh(texts: &[&str]) -> Vec<VectorizedDocument> {
        let docs: Vec<RawDocument> = texts.iter().map(|text| RawDocument::new(*text)).collect();
        let (batch, dict) = vectorize_batch(&docs, &Identity);
        TfIdf.weigh(batch, &dict)
    }

    #[test]
    fn term_in_every_document_weighs_zero() {
        let weighed = weigh(&["shared rare", "shared other"]);
        // df("shared") == 2, so idf = ln(2/2) = 0
        assert_eq!(weighed[0].vector.weight("shared"), 0.0);
        assert_eq!(weighed[1].vector.weight("shared"), 0.0);
    }

    #[test]
    fn rare_term_scales_with_count_and_idf() {
        let weighed = weigh(&["rare rare common", "common"]);
        let expected = 2.0 * (2.0f64 / 1.0).ln();
        assert!((weighed[0].vector.weight("rare") - expected).abs() < 1e-12);
    }

    #[test]
    fn key_sets_and_cardinality_survive() {
        let docs = vec![
            RawDocument::new("a b c"),
            RawDocument::new("c d"),
        ];
        let (batch, dict) = vectorize_batch(&docs, &Identity);
        let keys_before: Vec<Vec<String>> = batch
            .iter()
            .map(|d| d.vector.iter().map(|(t, _)| t.to_string()).collect())
            .collect();
        let weighed = TfIdf.weigh(batch, &dict);
        assert_eq!(weighed.len(), keys_before.len());
        for (doc, keys) in weighed.iter().zip(&keys_before) {
            let after: Vec<String> = doc.vector.iter().map(|(t, _)| t.to_string()).collect();
            assert_eq!(&after, keys);
        }
    }

    #[test]
    fn document_frequency_uses_membership() {
        // weight is zero for "shared" but it stays a key, so a later
        // membership-based df would still count it
        let weighed = weigh(&["shared a", "shared b"]);
        assert!(weighed[0].vector.contains_term("shared"));
        assert_eq!(weighed[0].vector.weight("shared"), 0.0);
    }
}
