/// This crate is a small-corpus document ranking engine using TF-IDF weighted
/// cosine similarity.
pub mod ranker;
pub mod utils;

/// TF-IDF Ranker
/// The top-level struct of this crate, providing the main ranking features.
/// It holds a fixed document collection and ranks it against a free-text
/// query by cosine similarity of TF-IDF weight vectors.
///
/// Internally, each query runs the full pipeline on fresh values:
/// - Vocabulary alignment over copies of the stored vectors
/// - IDF estimation (base-10) from the aligned collection
/// - TF-IDF weighting of every document and of the query
/// - Cosine scoring per document, in parallel
/// - Stable descending sort, then truncation to the requested count
///
/// The stored term-frequency vectors are never mutated, so repeated and
/// concurrent queries are pure functions of the collection and the query.
pub use ranker::TFIDFRanker;

/// Term Frequency structure
/// A struct for tallying term occurrences within a document or query.
/// It manages:
/// - The count of occurrences of each term
/// - The total number of terms tallied
///
/// Used as the base data for vocabulary alignment and TF-IDF weighting.
pub use ranker::term::TermFrequency;

/// Document record
/// One corpus entry: a term-frequency vector plus filename, url, author and
/// title metadata. Metadata is display-only; ranking never mutates it.
pub use ranker::document::Document;

/// IDF Vector and Weight Vector structures
/// `IdfVector` holds one base-10 inverse-document-frequency value per term of
/// the reference collection and produces `WeightVector`s from term-frequency
/// vectors. `WeightVector` is what cosine scoring consumes.
///
/// Weighting a vector that was never aligned fails with `WeightError`.
pub use ranker::tfidf::{IdfVector, WeightError, WeightVector};

/// Search Hits and Hit Entry structures
/// Data structures for managing search results.
/// - `Hits`: holds a list of results and provides stable sorting by score
///   and truncation to the requested count
/// - `HitEntry`: represents a single result, containing the document index
///   and score
pub use ranker::rank::{HitEntry, Hits};

/// Tokenizer
/// Turns raw text into normalized word tokens: dash normalization,
/// punctuation stripping, lowercasing, whitespace splitting. Documents and
/// queries must go through the same tokenization to share a vocabulary.
pub use ranker::tokenizer::tokenize;
