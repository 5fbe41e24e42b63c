// Lexical keyword gap between a candidate document and a reference document.
//
// A keyword is any maximal run of word characters (Unicode letters, numbers,
// underscore; combining marks are not word characters) at least `min_len`
// characters long, taken from the lowercased text. The gap is the reference
// vocabulary minus the candidate vocabulary, capped at `limit` entries.
//
// No stemming, no stop words. "Python" and "python" are the same keyword;
// "deploy" and "deployment" are not.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Shortest run of word characters that counts as a keyword.
pub const DEFAULT_MIN_LEN: usize = 5;

/// How many missing keywords to report by default.
pub const DEFAULT_MISSING_LIMIT: usize = 10;

// Maximal runs only: filtering these by length is equivalent to `\b\w{N,}\b`.
// Not `\w` itself, which also matches marks and joiners, so a decomposed
// "cafe\u{301}" would count five characters where "caf\u{e9}" counts four.
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word-run pattern is valid"));

/// Computes the keywords a reference text uses that a candidate text lacks.
///
/// Stateless apart from its two knobs, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordGapExtractor {
    /// Minimum keyword length, in characters
    pub min_len: usize,
    /// Maximum number of missing keywords returned
    pub limit: usize,
}

impl Default for KeywordGapExtractor {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            limit: DEFAULT_MISSING_LIMIT,
        }
    }
}

impl KeywordGapExtractor {
    /// Same extractor with a different result cap.
    pub fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    /// The keyword set of `text`.
    pub fn keywords(&self, text: &str) -> HashSet<String> {
        self.ordered_keywords(text).into_iter().collect()
    }

    /// The keywords of `text`, deduplicated, in order of first appearance.
    pub fn ordered_keywords(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut seen = HashSet::new();
        WORD_RUN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() >= self.min_len)
            .filter(|word| seen.insert(*word))
            .map(str::to_string)
            .collect()
    }

    /// Reference keywords absent from the candidate, at most `self.limit` of them.
    ///
    /// Results follow the order in which each keyword first appears in the
    /// reference text, so the same inputs always give the same list.
    pub fn missing(&self, candidate: &str, reference: &str) -> Vec<String> {
        if self.limit == 0 {
            return Vec::new();
        }

        let candidate_keywords = self.keywords(candidate);
        self.ordered_keywords(reference)
            .into_iter()
            .filter(|kw| !candidate_keywords.contains(kw))
            .take(self.limit)
            .collect()
    }
}

/// Extract the keyword set of `text` using the default minimum length.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    KeywordGapExtractor::default().keywords(text)
}

/// Keywords in `reference` that never appear in `candidate`, capped at `limit`.
pub fn find_missing_keywords(candidate: &str, reference: &str, limit: usize) -> Vec<String> {
    KeywordGapExtractor::default()
        .with_limit(limit)
        .missing(candidate, reference)
}
