use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ranker::term::TermFrequency;

/// Weighting failed because the collection was not aligned first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeightError {
    /// A term of the IDF vector has no entry in the target vector. Alignment
    /// inserts explicit zero counts, so a missing entry means alignment was
    /// skipped or the collection was mutated out of order.
    #[error("term `{0}` missing from target vector; align the collection before weighting")]
    MissingTerm(String),
}

/// Inverse document frequency per term of a reference collection.
///
/// Defined over the vocabulary of the collection at estimation time; terms
/// added to the corpus afterwards are unknown to this vector. Estimate fresh
/// per query rather than caching across corpus changes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct IdfVector {
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<String, f64>,
    /// document count at estimation time
    doc_num: u64,
}

impl IdfVector {
    /// Estimate IDF over an aligned collection.
    ///
    /// Terms are enumerated from the first vector; alignment guarantees that
    /// enumeration covers the whole collection. For each term,
    /// `idf(t) = log10(N / df(t))` where `N` is the vector count and `df(t)`
    /// the number of vectors holding a nonzero count. Base-10 exactly.
    ///
    /// A term with zero document frequency gets idf 0.0: it cannot
    /// discriminate between documents, so it contributes nothing to any
    /// score. The quotient would otherwise divide by zero.
    pub fn estimate(vectors: &[TermFrequency]) -> Self {
        let doc_num = vectors.len() as u64;
        let mut idf = IndexMap::new();
        let Some(first) = vectors.first() else {
            return IdfVector { idf, doc_num };
        };
        for term in first.terms() {
            let doc_freq = vectors
                .iter()
                .filter(|vector| vector.term_count(term) != 0)
                .count();
            let value = if doc_freq == 0 {
                0.0
            } else {
                (doc_num as f64 / doc_freq as f64).log10()
            };
            idf.insert(term.to_string(), value);
        }
        IdfVector { idf, doc_num }
    }

    /// Number of documents the estimate was taken over
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Terms the vector is defined over, in enumeration order
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.idf.keys().map(String::as_str)
    }

    /// IDF weight of `term`; `None` outside the vocabulary
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    #[inline]
    pub fn term_num(&self) -> usize {
        self.idf.len()
    }

    /// Produce the TF-IDF weight vector for `target`.
    ///
    /// Every term of this IDF vector must already have an entry in `target`
    /// (zero counts included); the result's key set equals this vector's.
    /// `target` is not mutated, so one estimate can weigh any number of
    /// vectors without cross-query contamination.
    pub fn weigh(&self, target: &TermFrequency) -> Result<WeightVector, WeightError> {
        let mut weights = IndexMap::with_capacity(self.idf.len());
        for (term, &idf) in &self.idf {
            let count = target
                .get(term)
                .ok_or_else(|| WeightError::MissingTerm(term.clone()))?;
            weights.insert(term.clone(), count as f64 * idf);
        }
        Ok(WeightVector { weights })
    }
}

/// A term-frequency vector scaled by IDF; what cosine scoring consumes.
///
/// Produced by [`IdfVector::weigh`] as a new value, never by mutating the
/// source counts in place.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    #[serde(with = "indexmap::map::serde_seq")]
    pub(crate) weights: IndexMap<String, f64>,
}

impl WeightVector {
    /// Weight of `term`; `None` outside the key set
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// (term, weight) pairs in enumeration order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    #[inline]
    pub fn term_num(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
