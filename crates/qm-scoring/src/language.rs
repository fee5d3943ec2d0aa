//! Dominant-language detection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::{strip_punctuation, words};

/// Languages the default detector can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English.
    English,
    /// German.
    German,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::German => write!(f, "German"),
            Self::French => write!(f, "French"),
            Self::Spanish => write!(f, "Spanish"),
            Self::Italian => write!(f, "Italian"),
            Self::Portuguese => write!(f, "Portuguese"),
            Self::Dutch => write!(f, "Dutch"),
        }
    }
}

/// Determines the dominant language of a piece of text.
pub trait LanguageDetector: Send + Sync {
    /// The dominant language, or `None` when it cannot be determined.
    fn detect(&self, text: &str) -> Option<Language>;
}

/// How far another language must lead English to be reported.
const ENGLISH_MARGIN: usize = 2;

/// Function words per language. Words that are also everyday English (such as
/// "die", "do", "no", "come") are left out of the other lists.
const STOPWORDS: &[(Language, &[&str])] = &[
    (
        Language::English,
        &[
            "the", "and", "is", "are", "was", "were", "of", "to", "it", "that", "with", "for",
            "this", "have", "has", "i", "you", "he", "she", "we", "they", "my", "his", "her",
            "not", "but", "be", "at", "on", "from", "by", "what", "which", "there", "their",
            "will", "would", "been", "an", "or", "a", "in", "do", "did", "does", "as", "so",
            "no", "if", "me", "our", "your", "can", "one", "all", "up", "out", "just", "like",
        ],
    ),
    (
        Language::German,
        &[
            "der", "das", "und", "ist", "nicht", "ich", "ein", "eine", "zu", "mit", "sich", "auf",
            "für", "den", "dem", "des", "auch", "es", "wir", "sie", "wie", "aber", "noch", "nach",
            "bei", "wird", "sind", "habe",
        ],
    ),
    (
        Language::French,
        &[
            "le", "la", "les", "et", "est", "un", "une", "des", "du", "je", "tu", "il", "elle",
            "nous", "vous", "ils", "pas", "que", "qui", "dans", "pour", "sur", "avec", "au",
            "mais", "ce", "cette", "sont", "suis", "très",
        ],
    ),
    (
        Language::Spanish,
        &[
            "el", "la", "los", "las", "y", "es", "un", "una", "que", "de", "en", "por", "para",
            "con", "yo", "tu", "él", "ella", "nosotros", "está", "pero", "muy", "del", "como",
            "más", "fue",
        ],
    ),
    (
        Language::Italian,
        &[
            "il", "la", "gli", "le", "è", "un", "una", "che", "di", "non", "con", "sono", "io",
            "lui", "lei", "noi", "voi", "loro", "anche", "della", "nel", "molto", "questo",
            "quella", "siamo",
        ],
    ),
    (
        Language::Portuguese,
        &[
            "os", "é", "uma", "que", "de", "em", "por", "para", "não", "eu", "ele", "ela", "nós",
            "está", "são", "mas", "muito", "dos", "das", "como", "foi", "isso", "você",
        ],
    ),
    (
        Language::Dutch,
        &[
            "de", "het", "een", "en", "niet", "ik", "je", "hij", "zij", "wij", "jullie", "van",
            "met", "voor", "maar", "ook", "dat", "zijn", "heb", "naar", "nog", "wel", "geen",
            "veel", "dit",
        ],
    ),
];

/// Detects the language by counting common function words.
///
/// English is reported when it has at least `min_hits` function words and no
/// other language beats it by two or more. Another language is reported only
/// when it clears `min_hits`, leads every other language, and leads English by
/// at least two. Everything else is undetermined.
#[derive(Debug, Clone, Copy)]
pub struct StopwordDetector {
    min_hits: usize,
}

impl Default for StopwordDetector {
    fn default() -> Self {
        Self { min_hits: 2 }
    }
}

impl StopwordDetector {
    /// Create a detector requiring `min_hits` function words to decide.
    pub fn new(min_hits: usize) -> Self {
        Self {
            min_hits: min_hits.max(1),
        }
    }
}

impl LanguageDetector for StopwordDetector {
    fn detect(&self, text: &str) -> Option<Language> {
        let tokens: Vec<String> = words(text)
            .map(|w| strip_punctuation(w).to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let hits = |list: &[&str]| tokens.iter().filter(|t| list.contains(&t.as_str())).count();

        let mut english = 0;
        let mut others: Vec<(Language, usize)> = Vec::with_capacity(STOPWORDS.len());
        for (lang, list) in STOPWORDS {
            match lang {
                Language::English => english = hits(*list),
                _ => others.push((*lang, hits(*list))),
            }
        }
        others.sort_by(|a, b| b.1.cmp(&a.1));

        let (best, best_hits) = others.first().copied()?;
        let runner_up = others.get(1).map_or(0, |(_, h)| *h);

        if english >= self.min_hits && english + ENGLISH_MARGIN > best_hits {
            Some(Language::English)
        } else if best_hits >= self.min_hits
            && best_hits > runner_up
            && best_hits >= english + ENGLISH_MARGIN
        {
            Some(best)
        } else {
            None
        }
    }
}
