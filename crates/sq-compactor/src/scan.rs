//! Scan rewrites for rules that need look-around or back-references.

use regex::Regex;
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Delete every `...` whose preceding character is not another `.`.
///
/// The preceding character is read from the input, so after a deleted run
/// the next dot is still considered "preceded by a dot": `......` → `...`.
pub fn strip_ellipses(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut i = 0;
    while i + 3 <= bytes.len() {
        if &bytes[i..i + 3] == b"..." && (i == 0 || bytes[i - 1] != b'.') {
            out.push_str(&text[cursor..i]);
            i += 3;
            cursor = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[cursor..]);
    out
}

/// Collapse a word immediately repeated after whitespace ("the the" → "the").
///
/// Comparison ignores case and the first spelling wins. Pairs do not
/// overlap, so a triple only loses one copy per pass.
pub fn collapse_repeated_words(text: &str) -> String {
    let words: Vec<_> = RE_WORD.find_iter(text).collect();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut i = 0;
    while i + 1 < words.len() {
        let (first, second) = (words[i], words[i + 1]);
        let gap = &text[first.end()..second.start()];
        let repeated = !gap.is_empty()
            && gap.chars().all(char::is_whitespace)
            && first.as_str().to_lowercase() == second.as_str().to_lowercase();
        if repeated {
            out.push_str(&text[cursor..first.end()]);
            cursor = second.end();
            i += 2;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[cursor..]);
    out
}
