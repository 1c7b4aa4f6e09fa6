use crate::ranker::term::TermFrequency;

/// Mutually zero-fill two vectors so they share a key set.
pub fn extend_vectors(a: &mut TermFrequency, b: &mut TermFrequency) {
    for term in a.terms() {
        b.insert_zero(term);
    }
    for term in b.terms() {
        a.insert_zero(term);
    }
}

/// Extend every vector in the collection so all share the union key set,
/// with zero inserted for terms absent from a given vector.
///
/// Two passes against the first vector: the first pass folds every
/// vocabulary into it, the second distributes the completed union back out.
/// No global vocabulary object is built. Re-running on an aligned collection
/// changes nothing, and a single-element collection is already aligned.
pub fn align_vocabulary(vectors: &mut [TermFrequency]) {
    let Some((first, rest)) = vectors.split_first_mut() else {
        return;
    };
    for vector in rest.iter_mut() {
        extend_vectors(first, vector);
    }
    for vector in rest.iter_mut() {
        extend_vectors(first, vector);
    }
}

/// Zero-fill `target` against an external term enumeration, pulling it into
/// that coordinate space. Terms of `target` outside the enumeration are left
/// as they are.
pub fn extend_to<'a, I>(target: &mut TermFrequency, vocabulary: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for term in vocabulary {
        target.insert_zero(term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_set(freq: &TermFrequency) -> Vec<&str> {
        let mut terms: Vec<&str> = freq.terms().collect();
        terms.sort_unstable();
        terms
    }

    #[test]
    fn aligned_vectors_share_one_key_set() {
        let mut vectors = vec![
            TermFrequency::from_tokens(&["cat", "cat", "dog"]),
            TermFrequency::from_tokens(&["dog", "dog", "fish"]),
            TermFrequency::from_tokens(&["bird"]),
        ];
        align_vocabulary(&mut vectors);

        let expected = ["bird", "cat", "dog", "fish"];
        for vector in &vectors {
            assert_eq!(key_set(vector), expected);
        }
        // counts are untouched, absences became zeros
        assert_eq!(vectors[0].term_count("cat"), 2);
        assert_eq!(vectors[0].get("fish"), Some(0));
        assert_eq!(vectors[2].get("cat"), Some(0));
    }

    #[test]
    fn alignment_is_idempotent() {
        let mut vectors = vec![
            TermFrequency::from_tokens(&["cat", "dog"]),
            TermFrequency::from_tokens(&["dog", "fish"]),
        ];
        align_vocabulary(&mut vectors);
        let aligned = vectors.clone();

        align_vocabulary(&mut vectors);
        assert_eq!(vectors, aligned);
    }

    #[test]
    fn single_element_collection_aligns_to_itself() {
        let mut vectors = vec![TermFrequency::from_tokens(&["cat", "dog"])];
        let before = vectors.clone();
        align_vocabulary(&mut vectors);
        assert_eq!(vectors, before);
    }

    #[test]
    fn empty_collection_is_a_noop() {
        let mut vectors: Vec<TermFrequency> = Vec::new();
        align_vocabulary(&mut vectors);
        assert!(vectors.is_empty());
    }

    #[test]
    fn totals_are_preserved_by_alignment() {
        let mut vectors = vec![
            TermFrequency::from_tokens(&["cat", "cat", "dog"]),
            TermFrequency::from_tokens(&["fish"]),
        ];
        align_vocabulary(&mut vectors);
        assert_eq!(vectors[0].term_sum(), 3);
        assert_eq!(vectors[1].term_sum(), 1);
    }

    #[test]
    fn extend_to_pulls_a_query_into_the_space() {
        let mut query = TermFrequency::from_tokens(&["cat", "unseen"]);
        extend_to(&mut query, ["cat", "dog", "fish"]);
        assert_eq!(query.get("dog"), Some(0));
        assert_eq!(query.get("fish"), Some(0));
        assert_eq!(query.term_count("cat"), 1);
        // terms outside the vocabulary stay put
        assert_eq!(query.term_count("unseen"), 1);
    }
}
