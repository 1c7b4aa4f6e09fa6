use crate::ranker::tfidf::WeightVector;

/// Cosine scoring over weight vectors
impl WeightVector {
    /// Euclidean norm of the vector
    #[inline]
    pub fn norm(&self) -> f64 {
        self.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Cosine similarity against `other` over the shared key set.
    /// cosθ = A・B / (|A||B|)
    ///
    /// Both vectors must come from the same IDF estimate so their key sets
    /// match. An all-zero vector is maximally dissimilar by convention: the
    /// score is 0.0, not a division by zero. With non-negative weights the
    /// result lies in `[0, 1]`.
    pub fn cosine(&self, other: &WeightVector) -> f64 {
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        let mut dot = 0.0_f64;
        for (term, a) in self.iter() {
            let b = other.get(term).unwrap_or(0.0);
            norm_a += a * a;
            norm_b += b * b;
            dot += a * b;
        }
        let norm_a = norm_a.sqrt();
        let norm_b = norm_b.sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }
}
