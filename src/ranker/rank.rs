use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::utils::sort::merge_sort_desc_by;

/// A single search result: document position in its ranker plus the score.
/// Duplicated scores are permitted; ordering among them is whatever the
/// stable sort preserves from input order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HitEntry {
    /// Index of the document in the ranker that produced this hit
    pub index: usize,
    /// Cosine similarity against the query
    pub score: f64,
}

/// Search results with ordering and truncation controls.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort by descending score with a stable merge sort: equal scores keep
    /// their input order, so near-tied documents surface reproducibly.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|entry| !entry.score.is_nan());
        let list = std::mem::take(&mut self.list);
        self.list = merge_sort_desc_by(list, &|entry: &HitEntry| entry.score);
        self
    }

    /// Keep only the `num` best hits. Call after sorting: truncating a fully
    /// sorted list keeps prefixes in agreement across growing `num`.
    pub fn truncate(&mut self, num: usize) -> &mut Self {
        self.list.truncate(num);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &HitEntry> {
        self.list.iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for entry in &self.list {
                writeln!(f, "    {}: {:.6}", entry.index, entry.score)?;
            }
            write!(f, "]")
        } else {
            // Default debug output
            f.debug_list().entries(&self.list).finish()
        }
    }
}
