/// Punctuation characters stripped from text before splitting.
/// Dashes are not in this set; they have their own normalization pass.
const PUNCTUATION: &str = "!'#$%&()*+,./:;<=>?@[\\]^_`{|}~";

/// Dash sequences deleted during normalization, in application order.
/// A dash directly between two alphanumeric characters (a hyphen) matches
/// none of these and survives.
const DASH_PATTERNS: [&str; 7] = ["-\n ", " -\n", "-\n", "\n-", "--", "- ", " -"];

/// Remove non-hyphen dashes from `text`.
///
/// Each pattern is deleted together with its adjacent whitespace, so a word
/// hyphenated across a line break is rejoined: `"exam-\nple"` becomes
/// `"example"`. `"well-known"` is left alone.
pub fn remove_dashes(text: &str) -> String {
    let mut text = text.to_string();
    for pattern in DASH_PATTERNS {
        text = text.replace(pattern, "");
    }
    text
}

/// Strip punctuation characters from `text`.
///
/// Must run after [`remove_dashes`]: the dash patterns match against the
/// surrounding punctuation and whitespace that stripping would disturb.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect()
}

/// Turn raw text into normalized word tokens.
///
/// Dash normalization, then punctuation stripping, then lowercasing, then
/// whitespace splitting. Empty input yields an empty `Vec`, not an error.
///
/// # Examples
/// ```
/// use tf_idf_ranker::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), ["hello", "world"]);
/// assert_eq!(tokenize("well-known"), ["well-known"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    remove_punctuation(&remove_dashes(text))
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
