//! Keyword extraction: frequency counting over tokenized text, with
//! per-caller presets for charset, length floor, frequency floor, and cap.

use std::collections::HashMap;

use crate::analysis::tokenizer::{tokenize, Charset};

/// Common English function words. The floor every extraction filters against.
pub const CORE_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can",
];

/// Extended list for ATS-report extraction: core words plus pronouns,
/// question words, and quantifiers that survive the 2-char length floor.
pub const ATS_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
    "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "our", "their",
];

/// Core words plus resume boilerplate (section names, filler verbs) that
/// would otherwise dominate skill extraction by sheer frequency.
pub const RESUME_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "using", "used",
    "work", "worked", "working", "experience", "education", "skills", "responsibilities",
    "developed", "managed", "created", "designed",
];

/// Tuning for one extraction pass. Callers use the named presets below;
/// every knob is public so tests can pin individual behaviors.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub charset: Charset,
    /// Tokens shorter than this are dropped before counting.
    pub min_len: usize,
    /// Tokens seen fewer times than this never become keywords.
    pub min_freq: u32,
    /// Result cap, applied after sorting.
    pub max_keywords: usize,
    /// Drop tokens consisting solely of digits.
    pub exclude_numbers: bool,
    pub stop_words: &'static [&'static str],
}

impl ExtractOptions {
    /// Strict extraction for the deterministic ATS report: a word must be
    /// seen at least twice to count as a keyword.
    pub fn ats() -> Self {
        Self {
            charset: Charset::Word,
            min_len: 2,
            min_freq: 2,
            max_keywords: 30,
            exclude_numbers: true,
            stop_words: ATS_STOP_WORDS,
        }
    }

    /// Permissive extraction for the degraded ATS path.
    pub fn basic() -> Self {
        Self {
            charset: Charset::Technical,
            min_len: 4,
            min_freq: 1,
            max_keywords: 15,
            exclude_numbers: false,
            stop_words: CORE_STOP_WORDS,
        }
    }

    /// Skill-oriented extraction for the degraded resume analysis.
    pub fn skills() -> Self {
        Self {
            charset: Charset::Technical,
            min_len: 3,
            min_freq: 1,
            max_keywords: 15,
            exclude_numbers: false,
            stop_words: RESUME_STOP_WORDS,
        }
    }
}

/// Extracts the most frequent keywords from `text` under `opts`.
///
/// Results sort by descending frequency; ties keep first-seen order, so the
/// output is fully deterministic for a given input. Empty input yields an
/// empty vector.
pub fn extract_keywords(text: &str, opts: &ExtractOptions) -> Vec<String> {
    let tokens = tokenize(text, opts.charset);

    let mut freq: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in &tokens {
        if token.len() < opts.min_len {
            continue;
        }
        if opts.stop_words.contains(&token.as_str()) {
            continue;
        }
        if opts.exclude_numbers && token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let count = freq.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    // Stable sort: equal frequencies keep first-seen order.
    order.sort_by(|a, b| freq[b].cmp(&freq[a]));

    order
        .into_iter()
        .filter(|t| freq[t] >= opts.min_freq)
        .take(opts.max_keywords)
        .map(str::to_string)
        .collect()
}
