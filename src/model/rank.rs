use std::fmt::Debug;

use crate::document::{RawDocument, VectorizedDocument};

/// A document paired with its relevance score. Exists only inside ranking.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub document: VectorizedDocument,
    pub score: f64,
}

/// Scored query results, sortable by score.
pub struct Hits {
    pub list: Vec<ScoredDocument>,
}

impl Hits {
    pub fn new(list: Vec<ScoredDocument>) -> Self {
        Hits { list }
    }

    /// Stable sort by descending score; score-equal entries keep their
    /// input (collection) order.
    ///
    /// Scores are finite by construction (similarity schemes guard their
    /// degenerate cases), so `total_cmp` is a plain total order here.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep the top `k` entries and strip scores, returning content and
    /// metadata only. Call after [`Hits::sort_by_score_desc`].
    pub fn into_top(self, k: usize) -> Vec<RawDocument> {
        self.list
            .into_iter()
            .take(k)
            .map(|hit| hit.document.into_raw())
            .collect()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:.6}: {:?}", hit.score, hit.document.content)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|hit| (&hit.document.content, hit.score)))
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TermVector;

    fn scored(content: &str, score: f64) -> ScoredDocument {
        ScoredDocument {
            document: VectorizedDocument {
                vector: TermVector::new(),
                content: content.to_string(),
                meta: None,
            },
            score,
        }
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let mut hits = Hits::new(vec![
            scored("low", 0.1),
            scored("high", 0.9),
            scored("mid", 0.5),
        ]);
        hits.sort_by_score_desc();
        let top = hits.into_top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].content, "high");
        assert_eq!(top[1].content, "mid");
    }

    #[test]
    fn ties_keep_input_order() {
        let mut hits = Hits::new(vec![
            scored("first", 0.5),
            scored("second", 0.5),
            scored("third", 0.5),
        ]);
        hits.sort_by_score_desc();
        let top = hits.into_top(3);
        let order: Vec<&str> = top.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}
