// ============================================================
// Layer 4 — Key Normaliser
// ============================================================
// Turns a record's raw text into the key used for emptiness and
// duplicate tests. Records keep their original text; only the
// key is normalised.
//
// Corpora scraped from social media carry a lot of invisible
// noise that makes two visually identical comments compare
// unequal:
//   - Non-breaking spaces (U+00A0)
//   - Zero-width spaces (U+200B) and BOMs (U+FEFF)
//   - Tabs, carriage returns, other control characters
//   - Doubled spaces and trailing whitespace
//
// `collapse` folds all of the above into single spaces and trims.
// ZWJ (U+200D) and ZWNJ (U+200C) are NOT touched: in Bangla they
// select conjunct forms, so removing them changes the word.
//
// Reference: Rust Book §8 (Strings in Rust)

use std::borrow::Cow;

use crate::domain::policy::NormalizationPolicy;

pub struct KeyNormalizer {
    policy: NormalizationPolicy,
}

impl KeyNormalizer {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    /// Produce the comparison key for `text`.
    /// Borrows when no change is needed.
    pub fn key<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.policy {
            NormalizationPolicy::Exact    => Cow::Borrowed(text),
            NormalizationPolicy::Trim     => Cow::Borrowed(text.trim()),
            NormalizationPolicy::Collapse => collapse(text),
        }
    }
}

impl Default for KeyNormalizer {
    fn default() -> Self {
        Self::new(NormalizationPolicy::default())
    }
}

/// Map invisible characters to spaces, collapse space runs, trim.
fn collapse(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    if !needs_collapse(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    let mut out        = String::with_capacity(trimmed.len());
    let mut last_space = true; // suppresses leading spaces

    for c in trimmed.chars().map(fold_char) {
        if c == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }

    // A trailing fold target (e.g. "abc\u{200B}") leaves one space behind
    if out.ends_with(' ') {
        out.pop();
    }
    Cow::Owned(out)
}

fn fold_char(c: char) -> char {
    match c {
        '\u{200C}' | '\u{200D}' => c,
        '\u{00A0}' | '\u{200B}' | '\u{FEFF}' | '\u{2060}' => ' ',
        c if c.is_whitespace() || c.is_control() => ' ',
        c => c,
    }
}

fn needs_collapse(text: &str) -> bool {
    let mut prev_space = false;
    for c in text.chars() {
        let folded = fold_char(c);
        if folded == ' ' && (c != ' ' || prev_space) {
            return true;
        }
        prev_space = folded == ' ';
    }
    false
}
