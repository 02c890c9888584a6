//! Query orchestration over the vectorize → weigh → score → rank pipeline.

pub mod rank;

pub use rank::{Hits, ScoredDocument};

use tracing::debug;

use crate::document::{RawDocument, VectorizedDocument};
use crate::error::QueryError;
use crate::mapper::{Identity, WordMapper};
use crate::similarity::SimilarityScheme;
use crate::vectorize::{vectorize_batch, vectorize_document, Dictionary, DictionaryBuilder};
use crate::weighing::{RawCount, WeighingScheme};

/// A vector space model over text documents, ranking a collection against a
/// query by similarity.
///
/// The three strategy seams are injected at construction: a similarity
/// scheme (required), a weighing scheme (raw counts when omitted), and a
/// word mapper (identity when omitted).
///
/// The model itself is stateless: [`VectorSpaceModel::query`] builds its
/// dictionary and vector batch fresh per call and discards them afterwards,
/// so a shared model can serve queries from many threads without
/// synchronization. For a fixed collection queried repeatedly, vectorize
/// once with [`VectorSpaceModel::index`] and use
/// [`VectorSpaceModel::query_indexed`].
///
/// # Examples
/// ```
/// use vsm_ranker::{
///     CaseInsensitive, CosineSimilarity, RawDocument, TfIdf, VectorSpaceModel,
/// };
///
/// let model = VectorSpaceModel::new(CosineSimilarity)
///     .with_weighing(TfIdf)
///     .with_mapper(CaseInsensitive);
///
/// let collection = vec![
///     RawDocument::new("Rust is fast."),
///     RawDocument::new("Rust is safe."),
/// ];
/// let hits = model.query("safe", &collection, 1).unwrap();
/// assert_eq!(hits[0].content, "Rust is safe.");
/// ```
pub struct VectorSpaceModel {
    similarity: Box<dyn SimilarityScheme>,
    weighing: Box<dyn WeighingScheme>,
    mapper: Box<dyn WordMapper>,
}

impl VectorSpaceModel {
    /// Create a model with the given similarity scheme, raw-count weighing,
    /// and identity word mapping.
    pub fn new(similarity: impl SimilarityScheme + 'static) -> Self {
        VectorSpaceModel {
            similarity: Box::new(similarity),
            weighing: Box::new(RawCount),
            mapper: Box::new(Identity),
        }
    }

    /// Replace the weighing scheme.
    pub fn with_weighing(mut self, weighing: impl WeighingScheme + 'static) -> Self {
        self.weighing = Box::new(weighing);
        self
    }

    /// Replace the word mapper.
    pub fn with_mapper(mut self, mapper: impl WordMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    /// Rank `collection` against `query_text` and return the top `k`
    /// documents, highest-scored first, scores stripped.
    ///
    /// The query joins the batch as a pseudo-document, so the dictionary and
    /// any normalized weighing (idf in particular) reflect its vocabulary.
    ///
    /// An empty collection short-circuits to an empty result before any
    /// other validation. Remaining usage errors fail fast: empty
    /// `query_text`, `k == 0`, or `k` exceeding the collection size.
    pub fn query(
        &self,
        query_text: &str,
        collection: &[RawDocument],
        k: usize,
    ) -> Result<Vec<RawDocument>, QueryError> {
        if collection.is_empty() {
            return Ok(Vec::new());
        }
        validate(query_text, collection.len(), k)?;

        let mut builder = DictionaryBuilder::new();
        let mut batch: Vec<VectorizedDocument> = collection
            .iter()
            .map(|doc| vectorize_document(doc, self.mapper.as_ref(), &mut builder))
            .collect();
        batch.push(vectorize_document(
            &RawDocument::new(query_text),
            self.mapper.as_ref(),
            &mut builder,
        ));
        let dictionary = builder.freeze();
        debug!(
            documents = collection.len(),
            terms = dictionary.len(),
            "query batch vectorized"
        );

        let batch = self.weighing.weigh(batch, &dictionary);
        Ok(self.score_and_rank(batch, k))
    }

    /// Vectorize `collection` once for repeated querying.
    ///
    /// The returned index holds the raw-count vectors and the sealed
    /// dictionary; queries treat it as read-only.
    pub fn index(&self, collection: &[RawDocument]) -> IndexedCollection {
        let (batch, dictionary) = vectorize_batch(collection, self.mapper.as_ref());
        IndexedCollection { batch, dictionary }
    }

    /// Rank a pre-vectorized collection against `query_text`.
    ///
    /// Validation matches [`VectorSpaceModel::query`]. The stored batch is
    /// never mutated: each call weighs a working copy with the query vector
    /// appended. Query terms absent from the indexed dictionary stay in the
    /// query vector but weigh zero under dictionary-driven schemes and
    /// intersect with no document either way.
    pub fn query_indexed(
        &self,
        query_text: &str,
        index: &IndexedCollection,
        k: usize,
    ) -> Result<Vec<RawDocument>, QueryError> {
        if index.is_empty() {
            return Ok(Vec::new());
        }
        validate(query_text, index.len(), k)?;

        let mut batch = index.batch.clone();
        let mut scratch = DictionaryBuilder::new();
        batch.push(vectorize_document(
            &RawDocument::new(query_text),
            self.mapper.as_ref(),
            &mut scratch,
        ));
        let batch = self.weighing.weigh(batch, &index.dictionary);
        Ok(self.score_and_rank(batch, k))
    }

    /// Split the query vector off the end of the weighed batch, score every
    /// remaining document against it, and take the top `k`.
    fn score_and_rank(&self, mut batch: Vec<VectorizedDocument>, k: usize) -> Vec<RawDocument> {
        let Some(query) = batch.pop() else {
            return Vec::new();
        };
        let scored: Vec<ScoredDocument> = batch
            .into_iter()
            .map(|document| {
                let score = self.similarity.score(&query, &document);
                ScoredDocument { document, score }
            })
            .collect();
        let mut hits = Hits::new(scored);
        hits.sort_by_score_desc();
        debug!(hits = hits.list.len(), k, "ranked query results");
        hits.into_top(k)
    }
}

/// Fail-fast usage validation, run before any vectorization work.
fn validate(query_text: &str, collection_len: usize, k: usize) -> Result<(), QueryError> {
    if query_text.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    if k == 0 {
        return Err(QueryError::InvalidK { k });
    }
    if k > collection_len {
        return Err(QueryError::KExceedsCollection {
            k,
            len: collection_len,
        });
    }
    Ok(())
}

/// A collection vectorized once, queried repeatedly.
///
/// Immutable after construction; concurrent queries over a shared reference
/// are safe because nothing here is ever written again.
pub struct IndexedCollection {
    batch: Vec<VectorizedDocument>,
    dictionary: Dictionary,
}

impl IndexedCollection {
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
