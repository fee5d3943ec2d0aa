//! Word-level helpers shared by the validator and the repetition check.

/// Whether `c` counts as punctuation to be trimmed from word edges.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}'
                | '\u{2019}'
                | '\u{201C}'
                | '\u{201D}'
                | '\u{2026}'
                | '\u{2013}'
                | '\u{2014}'
                | '\u{00AB}'
                | '\u{00BB}'
                | '\u{00A1}'
                | '\u{00BF}'
        )
}

/// Trim leading and trailing punctuation, keeping inner apostrophes and hyphens.
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(is_punctuation)
}

/// Whitespace-delimited words, empty pieces dropped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
