use serde::{Deserialize, Serialize};

use crate::ranker::term::TermFrequency;

/// One corpus entry: a term-frequency vector plus display metadata.
///
/// The stored vector is never mutated by ranking; each query weighs fresh
/// copies, so the same collection can serve repeated and concurrent queries.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Term-frequency vector built from the document body
    pub term_freq: TermFrequency,
    /// Source file name
    pub filename: String,
    /// Source url from the file preamble
    pub url: String,
    /// Author from the file preamble
    pub author: String,
    /// Title from the file preamble
    pub title: String,
}

impl Document {
    /// Create a document record. Metadata fields may be empty strings when
    /// the source carries no preamble.
    pub fn new(
        term_freq: TermFrequency,
        filename: &str,
        url: &str,
        author: &str,
        title: &str,
    ) -> Self {
        Document {
            term_freq,
            filename: filename.to_string(),
            url: url.to_string(),
            author: author.to_string(),
            title: title.to_string(),
        }
    }
}
