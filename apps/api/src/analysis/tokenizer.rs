//! Tokenizer: lowercases raw text, scrubs it against a charset policy, and
//! splits on whitespace. Every keyword pipeline in this module tree starts here.

/// Which characters survive normalization. Everything else becomes a space
/// before splitting, so punctuation acts as a token boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Keeps `a-z`, `0-9`, `+`, `#`, `.` so technology names like `c++`,
    /// `c#`, and `node.js` survive as single tokens.
    Technical,
    /// Keeps word characters only (`a-z`, `0-9`, `_`).
    Word,
}

impl Charset {
    fn keeps(self, c: char) -> bool {
        match self {
            Charset::Technical => {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.')
            }
            Charset::Word => c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_',
        }
    }
}

/// Splits `text` into lowercase tokens under the given charset policy.
///
/// Duplicates are retained and source order is preserved; downstream
/// extraction relies on both for frequency counts and tie-breaking.
/// Empty or all-punctuation input yields an empty vector, never an error.
pub fn tokenize(text: &str, charset: Charset) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if charset.keeps(c) { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
