//! The "is this a real sentence" predicate.

use crate::config::ScoringConfig;
use crate::dictionary::{Dictionary, WordList};
use crate::language::{Language, LanguageDetector, StopwordDetector};
use crate::text::{strip_punctuation, words};

/// Decides whether a segmented sentence counts toward the score.
pub trait SentenceValidator: Send + Sync {
    /// Whether `sentence` is valid. Never fails; bad input is simply invalid.
    fn is_valid(&self, sentence: &str) -> bool;
}

/// Validator for English prose.
///
/// Checks run in order: minimum word count, dominant language (rejected only
/// when determined and not English), then the share of dictionary words.
pub struct EnglishValidator {
    dictionary: Box<dyn Dictionary>,
    detector: Box<dyn LanguageDetector>,
    min_words: usize,
    min_ratio: f64,
}

impl std::fmt::Debug for EnglishValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishValidator")
            .field("min_words", &self.min_words)
            .field("min_ratio", &self.min_ratio)
            .finish_non_exhaustive()
    }
}

impl Default for EnglishValidator {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl EnglishValidator {
    /// Create a validator with the embedded word list and stopword detector.
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            dictionary: Box::new(WordList::english()),
            detector: Box::new(StopwordDetector::default()),
            min_words: config.min_words,
            min_ratio: config.min_dictionary_ratio,
        }
    }

    /// Replace the dictionary.
    pub fn with_dictionary(mut self, dictionary: impl Dictionary + 'static) -> Self {
        self.dictionary = Box::new(dictionary);
        self
    }

    /// Replace the language detector.
    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }
}

impl SentenceValidator for EnglishValidator {
    fn is_valid(&self, sentence: &str) -> bool {
        let tokens: Vec<&str> = words(sentence).collect();
        if tokens.len() < self.min_words || tokens.is_empty() {
            return false;
        }

        if let Some(language) = self.detector.detect(sentence)
            && language != Language::English
        {
            return false;
        }

        let known = tokens
            .iter()
            .map(|w| strip_punctuation(w))
            .filter(|w| !w.is_empty() && self.dictionary.contains(w))
            .count();
        known as f64 / tokens.len() as f64 >= self.min_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<Language>);

    impl LanguageDetector for Fixed {
        fn detect(&self, _text: &str) -> Option<Language> {
            self.0
        }
    }

    fn validator() -> EnglishValidator {
        EnglishValidator::default()
    }

    #[test]
    fn too_short() {
        assert!(!validator().is_valid("Hello there."));
        assert!(!validator().is_valid(""));
    }

    #[test]
    fn plain_english() {
        assert!(validator().is_valid("The cat sat."));
        assert!(validator().is_valid("Birds fly high today."));
        assert!(validator().is_valid("I walked to the park with my friends yesterday."));
    }

    #[test]
    fn english_sharing_words_with_other_languages() {
        for text in [
            "Do as I do.",
            "Do as you like.",
            "I do as I please, no one minds.",
            "No one came to the door.",
            "He lives in La Paz now.",
            "Come as you are.",
            "The die is cast.",
        ] {
            assert!(validator().is_valid(text), "{text}");
        }
    }

    #[test]
    fn gibberish_rejected() {
        assert!(!validator().is_valid("asdf qwer zxcv."));
        assert!(!validator().is_valid("The blorp zinged flarnishly wibbly."));
    }

    #[test]
    fn sixty_percent_threshold() {
        let dict = WordList::from_words(["one", "two", "three"]);
        let v = EnglishValidator::default()
            .with_dictionary(dict)
            .with_detector(Fixed(None));
        // 3 of 5 known: exactly 0.6
        assert!(v.is_valid("one two three xx yy"));
        // 2 of 4 known: 0.5
        assert!(!v.is_valid("one two xx yy"));
    }

    #[test]
    fn punctuation_only_words_count_against_ratio() {
        let dict = WordList::from_words(["one", "two", "three"]);
        let v = EnglishValidator::default()
            .with_dictionary(dict)
            .with_detector(Fixed(None));
        // 3 known of 6 whitespace words
        assert!(!v.is_valid("one - two - three -"));
    }

    #[test]
    fn foreign_language_rejected_even_with_known_words() {
        let v = EnglishValidator::default()
            .with_dictionary(WordList::from_words(["je", "suis", "content"]))
            .with_detector(Fixed(Some(Language::French)));
        assert!(!v.is_valid("je suis content"));
    }

    #[test]
    fn undetermined_language_falls_through() {
        let v = EnglishValidator::default()
            .with_dictionary(WordList::from_words(["ola", "mundo", "hoy"]))
            .with_detector(Fixed(None));
        assert!(v.is_valid("ola mundo hoy"));
    }

    #[test]
    fn default_detector_rejects_german() {
        assert!(!validator().is_valid("Ich habe heute nicht viel Zeit, aber das ist gut."));
    }

    #[test]
    fn custom_min_words() {
        let v = EnglishValidator::new(&ScoringConfig::default().with_min_words(1));
        assert!(v.is_valid("Hello."));
    }
}
