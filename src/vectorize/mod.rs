//! Batch vectorization: tokenize documents into term vectors while
//! accumulating the shared dictionary of dimensions.

pub mod tokenizer;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{RawDocument, TermVector, VectorizedDocument};
use crate::mapper::WordMapper;

pub use tokenizer::tokenize;

/// Accumulates the set of distinct mapped terms seen across one batch.
///
/// Grows monotonically during the tokenization pass and is sealed with
/// [`DictionaryBuilder::freeze`] before any weighing happens.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    terms: IndexSet<String>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        DictionaryBuilder {
            terms: IndexSet::new(),
        }
    }

    #[inline]
    pub fn insert(&mut self, term: &str) {
        if !self.terms.contains(term) {
            self.terms.insert(term.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Seal the builder into a read-only dictionary.
    pub fn freeze(self) -> Dictionary {
        Dictionary { terms: self.terms }
    }
}

/// The sealed set of all terms observed across a batch of documents.
///
/// Read-only once built; every term in it was produced by at least one
/// document of the batch (the query pseudo-document included).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    terms: IndexSet<String>,
}

impl Dictionary {
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|term| term.as_str())
    }
}

/// Vectorize one document: tokenize, map each token, count it, and record
/// the mapped term in the dictionary builder.
///
/// Empty content yields a zero vector, not an error. Metadata is cloned
/// (deep copy) from the input document.
pub fn vectorize_document(
    doc: &RawDocument,
    mapper: &dyn WordMapper,
    builder: &mut DictionaryBuilder,
) -> VectorizedDocument {
    let mut vector = TermVector::new();
    for token in tokenize(&doc.content) {
        let term = mapper.map(token);
        if term.is_empty() {
            continue;
        }
        builder.insert(&term);
        vector.add_term(&term);
    }
    VectorizedDocument {
        vector,
        content: doc.content.clone(),
        meta: doc.meta.clone(),
    }
}

/// Vectorize a whole batch, co-populating a single dictionary.
pub fn vectorize_batch(
    docs: &[RawDocument],
    mapper: &dyn WordMapper,
) -> (Vec<VectorizedDocument>, Dictionary) {
    let mut builder = DictionaryBuilder::new();
    let batch: Vec<VectorizedDocument> = docs
        .iter()
        .map(|doc| vectorize_document(doc, mapper, &mut builder))
        .collect();
    let dictionary = builder.freeze();
    debug!(
        documents = batch.len(),
        terms = dictionary.len(),
        "vectorized batch"
    );
    (batch, dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{CaseInsensitive, Identity};

    #[test]
    fn counts_terms_and_grows_dictionary() {
        let docs = vec![
            RawDocument::new("a b a"),
            RawDocument::new("b c"),
        ];
        let (batch, dict) = vectorize_batch(&docs, &Identity);
        assert_eq!(batch.len(), 2);
        assert_eq!(dict.len(), 3);
        assert_eq!(batch[0].vector.weight("a"), 2.0);
        assert_eq!(batch[0].vector.weight("b"), 1.0);
        assert_eq!(batch[1].vector.weight("c"), 1.0);
        assert!(!batch[1].vector.contains_term("a"));
    }

    #[test]
    fn mapper_runs_before_counting() {
        let docs = vec![RawDocument::new("Test TEST test")];
        let (batch, dict) = vectorize_batch(&docs, &CaseInsensitive);
        assert_eq!(batch[0].vector.weight("test"), 3.0);
        assert!(dict.contains("test"));
        assert!(!dict.contains("Test"));
    }

    #[test]
    fn empty_content_yields_zero_vector() {
        let docs = vec![RawDocument::new("")];
        let (batch, dict) = vectorize_batch(&docs, &Identity);
        assert!(batch[0].vector.is_empty());
        assert!(dict.is_empty());
    }

    #[test]
    fn every_dictionary_term_occurs_in_some_document() {
        let docs = vec![
            RawDocument::new("alpha beta"),
            RawDocument::new("gamma"),
        ];
        let (batch, dict) = vectorize_batch(&docs, &Identity);
        for term in dict.iter() {
            assert!(
                batch.iter().any(|doc| doc.vector.contains_term(term)),
                "dictionary term {term} missing from every document"
            );
        }
    }
}
