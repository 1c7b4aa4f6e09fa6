pub mod align;
pub mod document;
pub mod rank;
pub mod score;
pub mod term;
pub mod tfidf;
pub mod tokenizer;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ranker::align::{align_vocabulary, extend_to};
use crate::ranker::document::Document;
use crate::ranker::rank::{HitEntry, Hits};
use crate::ranker::term::TermFrequency;
use crate::ranker::tfidf::{IdfVector, WeightError};

/// TF-IDF cosine ranker over a fixed document collection.
///
/// The stored term-frequency vectors are immutable inputs. Each call to
/// [`rank`](TFIDFRanker::rank) aligns fresh copies, estimates IDF from them,
/// and produces new weight vectors, so repeated and concurrent queries are
/// pure functions of the collection and the query text; weighting never
/// compounds across calls.
///
/// # Examples
/// ```
/// use tf_idf_ranker::{Document, TermFrequency, TFIDFRanker};
///
/// let mut ranker = TFIDFRanker::new();
/// let freq = TermFrequency::from_tokens(&["rust", "fast", "rust"]);
/// ranker.add_doc(Document::new(freq, "doc1.txt", "", "", ""));
///
/// let query = TermFrequency::from_tokens(&["rust"]);
/// let hits = ranker.rank(&query, 1).unwrap();
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TFIDFRanker {
    /// Document collection in insertion order; hit indices point into it
    pub documents: Vec<Document>,
}

impl TFIDFRanker {
    /// Create an empty ranker
    pub fn new() -> Self {
        TFIDFRanker {
            documents: Vec::new(),
        }
    }

    /// Build a ranker over an existing collection
    pub fn from_documents(documents: Vec<Document>) -> Self {
        TFIDFRanker { documents }
    }

    /// Append a document to the collection
    pub fn add_doc(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Number of documents in the collection
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Document behind a hit index
    pub fn get_doc(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Rank the collection against a query term-frequency vector and keep
    /// the `num_results` closest documents.
    ///
    /// Pipeline per call: clone the stored vectors, align their vocabulary,
    /// estimate IDF, pull the query into the shared space, weigh everything,
    /// score each document by cosine similarity, then stable-sort descending
    /// and truncate. Truncation happens only after the full sort, so a
    /// larger `num_results` extends a smaller one's prefix.
    ///
    /// Query terms outside the corpus vocabulary carry no weight and drop
    /// out of scoring. An empty collection yields empty hits.
    pub fn rank(&self, query: &TermFrequency, num_results: usize) -> Result<Hits, WeightError> {
        if self.documents.is_empty() {
            return Ok(Hits::default());
        }

        // Fresh copies per query: the stored vectors stay untouched.
        let mut vectors: Vec<TermFrequency> = self
            .documents
            .iter()
            .map(|doc| doc.term_freq.clone())
            .collect();
        align_vocabulary(&mut vectors);
        let idf = IdfVector::estimate(&vectors);

        let mut query_vec = query.clone();
        extend_to(&mut query_vec, idf.terms());
        let query_weights = idf.weigh(&query_vec)?;

        let entries = vectors
            .par_iter()
            .enumerate()
            .map(|(index, vector)| {
                let weights = idf.weigh(vector)?;
                Ok(HitEntry {
                    index,
                    score: weights.cosine(&query_weights),
                })
            })
            .collect::<Result<Vec<HitEntry>, WeightError>>()?;

        let mut hits = Hits::new(entries);
        hits.sort_by_score_desc();
        hits.truncate(num_results);
        Ok(hits)
    }
}
