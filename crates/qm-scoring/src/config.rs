//! Thresholds and point values for scoring.

/// Configuration for the scoring engine and its default validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Sentences with fewer whitespace-delimited words are invalid.
    pub min_words: usize,
    /// Fraction of words that must be recognized by the dictionary.
    pub min_dictionary_ratio: f64,
    /// Points awarded for each valid sentence.
    pub points_per_sentence: i64,
    /// Points deducted from a valid sentence that repeats a word.
    pub repetition_penalty: i64,
    /// A word occurring this many times makes a sentence repetitive.
    pub repetition_threshold: usize,
    /// Shorter words are ignored by the repetition check.
    pub min_counted_word_len: usize,
    /// Sentence count that triggers the milestone.
    pub milestone_sentences: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_words: 3,
            min_dictionary_ratio: 0.6,
            points_per_sentence: 3,
            repetition_penalty: 2,
            repetition_threshold: 3,
            min_counted_word_len: 3,
            milestone_sentences: 10,
        }
    }
}

impl ScoringConfig {
    /// Set the minimum word count for a valid sentence.
    pub fn with_min_words(mut self, n: usize) -> Self {
        self.min_words = n;
        self
    }

    /// Set the required dictionary ratio (clamped to 0.0-1.0).
    pub fn with_min_dictionary_ratio(mut self, ratio: f64) -> Self {
        self.min_dictionary_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the points per valid sentence and the repetition penalty.
    pub fn with_points(mut self, per_sentence: i64, repetition_penalty: i64) -> Self {
        self.points_per_sentence = per_sentence;
        self.repetition_penalty = repetition_penalty;
        self
    }

    /// Set the sentence count that triggers the milestone.
    pub fn with_milestone(mut self, sentences: usize) -> Self {
        self.milestone_sentences = sentences;
        self
    }
}
