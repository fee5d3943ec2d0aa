//! Word recognition for the dictionary-ratio check.

use std::collections::HashSet;

/// Decides whether a single punctuation-stripped word is a real word.
pub trait Dictionary: Send + Sync {
    /// Whether `word` is recognized. Implementations handle case folding.
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, &word.to_lowercase())
    }
}

const ENGLISH_WORDS: &str = include_str!("../data/english_words.txt");

/// A set of known words with simple English inflection handling.
///
/// Lookups are case-insensitive and accept regular plurals, past tenses,
/// present participles, comparatives, `-ly` adverbs, and possessives of any
/// listed base form. Purely numeric tokens are always recognized.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// The embedded English word list.
    pub fn english() -> Self {
        Self::from_words(
            ENGLISH_WORDS
                .lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .flat_map(str::split_whitespace),
        )
    }

    /// Build a list from arbitrary words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Number of base forms.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn has(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn knows_inflection(&self, word: &str) -> bool {
        if let Some(stem) = word.strip_suffix("'s").or_else(|| word.strip_suffix("s'")) {
            return self.has(stem) || self.knows_inflection(stem);
        }
        candidate_stems(word).iter().any(|stem| self.has(stem))
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        self.has(&word) || self.knows_inflection(&word)
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace('\u{2019}', "'")
}

/// Base forms a regularly inflected word may come from.
fn candidate_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    let mut push = |s: String| {
        if s.len() >= 2 {
            stems.push(s);
        }
    };

    if let Some(base) = word.strip_suffix("ies") {
        push(format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("es") {
        push(base.to_string());
    }
    if let Some(base) = word.strip_suffix('s')
        && !base.ends_with('s')
    {
        push(base.to_string());
    }
    if let Some(base) = word.strip_suffix("ied") {
        push(format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("ed") {
        push(base.to_string());
        push(format!("{base}e"));
        if let Some(undoubled) = undouble(base) {
            push(undoubled);
        }
    }
    if let Some(base) = word.strip_suffix("ing") {
        push(base.to_string());
        push(format!("{base}e"));
        if let Some(undoubled) = undouble(base) {
            push(undoubled);
        }
    }
    if let Some(base) = word.strip_suffix("ily") {
        push(format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("ly") {
        push(base.to_string());
        push(format!("{base}le"));
    }
    for suffix in ["er", "est"] {
        if let Some(base) = word.strip_suffix(suffix) {
            push(base.to_string());
            push(format!("{base}e"));
            if let Some(undoubled) = undouble(base) {
                push(undoubled);
            }
        }
    }
    for suffix in ["ier", "iest"] {
        if let Some(base) = word.strip_suffix(suffix) {
            push(format!("{base}y"));
        }
    }
    stems
}

/// `stopp` -> `stop`, `runn` -> `run`.
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let (last, prev) = (chars.next()?, chars.next()?);
    (last == prev && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u'))
        .then(|| stem[..stem.len() - last.len_utf8()].to_string())
}
