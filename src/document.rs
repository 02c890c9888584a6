use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Open-ended document metadata supplied by the caller.
///
/// Values are arbitrary JSON values; cloning a `Metadata` is a deep copy, so
/// an ingested document never shares metadata storage with the caller.
pub type Metadata = IndexMap<String, serde_json::Value>;

/// A raw input document: text content plus optional caller metadata.
///
/// Input-only; the engine never mutates a `RawDocument` it was handed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawDocument {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

impl RawDocument {
    pub fn new(content: impl Into<String>) -> Self {
        RawDocument {
            content: content.into(),
            meta: None,
        }
    }

    pub fn with_meta(content: impl Into<String>, meta: Metadata) -> Self {
        RawDocument {
            content: content.into(),
            meta: Some(meta),
        }
    }
}

/// A sparse mapping from term to numeric weight.
///
/// Weights start out as raw occurrence counts during vectorization and are
/// rescaled to real values by a weighing scheme. Keys are always mapped
/// terms; raw tokens never enter a vector without passing the word mapper.
///
/// # Examples
/// ```
/// use vsm_ranker::TermVector;
/// let mut vector = TermVector::new();
/// vector.add_term("rust");
/// vector.add_term("fast");
/// vector.add_term("rust");
///
/// assert_eq!(vector.weight("rust"), 2.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TermVector {
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, f64>,
}

impl TermVector {
    pub fn new() -> Self {
        TermVector {
            weights: IndexMap::new(),
        }
    }

    /// Count one occurrence of `term`.
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        *self.weights.entry(term.to_string()).or_insert(0.0) += 1.0;
        self
    }

    /// Set the weight of `term` directly, inserting it if absent.
    pub fn set_weight(&mut self, term: &str, weight: f64) -> &mut Self {
        self.weights.insert(term.to_string(), weight);
        self
    }

    /// Weight of `term`, or `0.0` when the term is not a key of this vector.
    #[inline]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Membership test on the key set.
    ///
    /// This is the document-frequency signal: a term counts as present even
    /// if its stored weight happens to be zero.
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, weight)| (term.as_str(), *weight))
    }

    /// Rescale every weight through `f`, producing a fresh vector with the
    /// identical key set. This is the only rescaling hook weighing schemes
    /// use, so a scheme cannot add or drop dimensions by accident.
    pub fn map_weights<F>(&self, f: F) -> TermVector
    where
        F: Fn(&str, f64) -> f64,
    {
        let weights = self
            .weights
            .iter()
            .map(|(term, weight)| (term.clone(), f(term, *weight)))
            .collect();
        TermVector { weights }
    }

    /// Dot product over the intersection of the two key sets.
    ///
    /// Iterates the smaller vector; the result is symmetric.
    pub fn dot_product(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .map(|(term, weight)| weight * large.weight(term))
            .sum()
    }

    /// Euclidean (L2) length: sqrt of the sum of squared weights.
    pub fn euclidean_length(&self) -> f64 {
        self.weights
            .values()
            .map(|weight| weight * weight)
            .sum::<f64>()
            .sqrt()
    }
}

/// A document after vectorization: its term vector plus the content and a
/// deep copy of the input metadata.
///
/// Owned by the engine for the duration of one query (or for the lifetime of
/// an indexed collection); never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizedDocument {
    pub vector: TermVector,
    pub content: String,
    pub meta: Option<Metadata>,
}

impl VectorizedDocument {
    /// Drop the vector and hand back content + metadata only.
    pub fn into_raw(self) -> RawDocument {
        RawDocument {
            content: self.content,
            meta: self.meta,
        }
    }
}
