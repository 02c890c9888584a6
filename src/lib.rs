/// This crate is a document ranking engine built on a Vector Space Model.
pub mod document;
pub mod error;
pub mod mapper;
pub mod model;
pub mod similarity;
pub mod vectorize;
pub mod weighing;

/// Vector Space Model
/// The top-level struct of this crate, ranking a document collection
/// against a query string by similarity.
///
/// The pipeline behind one query:
/// - tokenize every document plus the query (as a pseudo-document) into
///   term-frequency vectors over a shared dictionary
/// - reweigh the batch with the configured weighing scheme
/// - score every document against the query vector with the configured
///   similarity scheme
/// - rank and return the top k documents, scores stripped
///
/// All three strategy seams are injected at construction:
/// - similarity scheme (required, e.g. `CosineSimilarity`)
/// - weighing scheme (optional, raw counts when omitted, e.g. `TfIdf`)
/// - word mapper (optional, identity when omitted, e.g. `CaseInsensitive`)
///
/// Two call patterns are supported:
/// - `query` builds everything fresh per call and retains no state
/// - `index` vectorizes a fixed collection once; `query_indexed` then reuses
///   the stored vectors and dictionary read-only
pub use model::VectorSpaceModel;

/// Indexed Collection
/// A document collection vectorized once for repeated querying.
/// Holds the raw-count vector batch and the sealed dictionary; both are
/// immutable after construction, so shared references can serve concurrent
/// queries without synchronization.
pub use model::IndexedCollection;

/// Raw Document and Metadata
/// `RawDocument` is the engine's input type: text content plus an optional
/// open-ended metadata mapping. Metadata values are arbitrary JSON values
/// and are deep-copied on ingestion, so results never alias caller-owned
/// structures.
pub use document::{Metadata, RawDocument};

/// Term Vector structure
/// A sparse term-to-weight mapping with the vector primitives used by
/// similarity schemes: `dot_product` and `euclidean_length`, each
/// independently callable.
pub use document::TermVector;

/// Vectorized Document
/// A document after tokenization: its term vector, content, and a deep copy
/// of the input metadata. Custom weighing and similarity schemes operate on
/// this type.
pub use document::VectorizedDocument;

/// Dictionary and its builder
/// The set of all terms observed across one batch of documents.
/// `DictionaryBuilder` accumulates terms during the tokenization pass and is
/// frozen into a read-only `Dictionary` before weighing.
pub use vectorize::{Dictionary, DictionaryBuilder};

/// Word Mapper trait and default mappers
/// A mapper normalizes each token before it is counted. Provided
/// implementations:
/// - `Identity`: pass-through (the default)
/// - `CaseInsensitive`: lowercases tokens
/// - `NoPunctuation`: strips ASCII punctuation
pub use mapper::{CaseInsensitive, Identity, NoPunctuation, WordMapper};

/// Weighing Scheme trait and default schemes
/// A scheme rewrites the batch's vector values over the shared dictionary
/// without touching key sets or batch cardinality. Provided
/// implementations:
/// - `RawCount`: leaves raw occurrence counts in place (the default)
/// - `TfIdf`: textbook tf-idf with `idf = ln(n / df)`
pub use weighing::{RawCount, TfIdf, WeighingScheme};

/// Similarity Scheme trait and default scheme
/// A scheme scores a document vector against the query vector. The provided
/// `CosineSimilarity` measures angular closeness independent of magnitude
/// and scores zero-length vectors as 0.0 rather than NaN.
pub use similarity::{CosineSimilarity, SimilarityScheme};

/// Query Error taxonomy
/// Fail-fast usage errors: empty query text, `k == 0`, or `k` exceeding the
/// collection size. Degenerate-but-valid inputs (empty collection, empty
/// document content, disjoint vocabulary) never error.
pub use error::QueryError;

/// Scored results used inside ranking
/// `Hits` holds `(document, score)` pairs and sorts them descending with a
/// stable tie order; `ScoredDocument` is one such pair.
pub use model::{Hits, ScoredDocument};
