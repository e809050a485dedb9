//! Splits raw message text into clean word tokens.
//!
//! Tokenization is deliberately dumb: split on whitespace, strip punctuation
//! from each word, and drop anything that becomes empty. All linguistic
//! sophistication lives in the transition tables, not here.

/// Tokenizes a message: whitespace-separated words with ASCII punctuation
/// removed. Words that are nothing but punctuation disappear entirely.
///
/// # Examples
///
/// ```rust
/// use prattle::automaton::tokenize;
/// assert_eq!(tokenize("hi, I'm tester!"), vec!["hi", "Im", "tester"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}
