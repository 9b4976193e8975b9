//! Word-boundary tokenizer.
//!
//! A word is a run of letters, digits or underscores, optionally joined by
//! internal periods ("node.js", "e.g"). A trailing period is not part of the
//! word, so "git." yields "git" and ".". Every other non-space character is
//! a token on its own: "ci/cd" yields "ci", "/", "cd".
//!
//! URLs starting with a scheme or `www.` and e-mail addresses stay whole,
//! so "https://github.com/git" and "python@corp.com" are single tokens.
//! Trailing sentence punctuation is not part of a URL.

use once_cell::sync::Lazy;
use regex::Regex;

// Alternatives are tried in order at each position, so URLs and e-mail
// addresses win over the plain word pattern.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?:https?://|www\.)\S*[^\s.,;:!?)\]}'"]"#,
        r"|[\p{L}\p{N}_.+\-]+@[\p{L}\p{N}\-]+(?:\.[\p{L}\p{N}\-]+)+",
        r"|[\p{L}\p{N}_]+(?:\.[\p{L}\p{N}_]+)*",
        r"|\S",
    ))
    .expect("Invalid token regex")
});

/// Splits `text` into tokens, borrowing from the input. Case is left untouched.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}
