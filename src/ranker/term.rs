use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Term occurrence counts for one document or query.
///
/// Counts are raw tallies; no normalization by document length happens here.
/// The IDF weighting and cosine scoring downstream compensate for length.
/// Entries with a zero count exist only after vocabulary alignment has run;
/// before that, absence means zero.
///
/// # Examples
/// ```
/// use tf_idf_ranker::TermFrequency;
///
/// let mut freq = TermFrequency::new();
/// freq.add_term("rust");
/// freq.add_terms(&["fast", "rust"]);
/// assert_eq!(freq.term_count("rust"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    /// Create an empty TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Tally a token sequence into a term-frequency vector.
    /// An empty sequence yields an empty mapping, not an error.
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = TermFrequency::new();
        freq.add_terms(tokens);
        freq
    }

    /// Count one occurrence of `term`
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Count one occurrence of each term in the slice
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Register `term` at count zero without touching the total.
    /// Vocabulary alignment uses this to give every vector the same key set.
    #[inline]
    pub fn insert_zero(&mut self, term: &str) -> &mut Self {
        self.term_count.entry(term.to_string()).or_insert(0);
        self
    }

    /// Occurrence count of `term`; zero when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Occurrence count of `term`, distinguishing a zero entry from absence.
    /// The weighter relies on this: after alignment a term may legitimately
    /// sit at zero, while a missing entry is a precondition violation.
    #[inline]
    pub fn get(&self, term: &str) -> Option<u32> {
        self.term_count.get(term).copied()
    }

    /// Whether `term` has an entry (zero counts included)
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Sum of all counts; equals the number of tokens tallied
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct entries (zero counts included)
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Entry terms in insertion order
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(String::as_str)
    }

    /// (term, count) pairs in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_token_count() {
        for tokens in [
            &[][..],
            &["cat"][..],
            &["cat", "dog", "cat"][..],
            &["a", "b", "c", "a", "b", "a"][..],
        ] {
            let freq = TermFrequency::from_tokens(tokens);
            let summed: u64 = freq.iter().map(|(_, count)| count as u64).sum();
            assert_eq!(summed, tokens.len() as u64);
            assert_eq!(freq.term_sum(), tokens.len() as u64);
        }
    }

    #[test]
    fn empty_tokens_yield_empty_mapping() {
        let freq = TermFrequency::from_tokens::<&str>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.term_num(), 0);
        assert_eq!(freq.term_sum(), 0);
    }

    #[test]
    fn tally_is_per_term() {
        let freq = TermFrequency::from_tokens(&["cat", "cat", "dog"]);
        assert_eq!(freq.term_count("cat"), 2);
        assert_eq!(freq.term_count("dog"), 1);
        assert_eq!(freq.term_count("fish"), 0);
        assert!(!freq.contains_term("fish"));
    }

    #[test]
    fn insert_zero_registers_without_counting() {
        let mut freq = TermFrequency::from_tokens(&["cat"]);
        freq.insert_zero("dog");
        assert!(freq.contains_term("dog"));
        assert_eq!(freq.get("dog"), Some(0));
        assert_eq!(freq.term_sum(), 1);

        // an existing count is left alone
        freq.insert_zero("cat");
        assert_eq!(freq.term_count("cat"), 1);
    }

    #[test]
    fn get_distinguishes_zero_from_absent() {
        let mut freq = TermFrequency::new();
        freq.insert_zero("dog");
        assert_eq!(freq.get("dog"), Some(0));
        assert_eq!(freq.get("cat"), None);
    }

    #[test]
    fn terms_keep_insertion_order() {
        let freq = TermFrequency::from_tokens(&["c", "a", "b", "a"]);
        let terms: Vec<&str> = freq.terms().collect();
        assert_eq!(terms, ["c", "a", "b"]);
    }
}
