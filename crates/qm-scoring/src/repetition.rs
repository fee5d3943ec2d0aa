//! Repeated-word detection.

use std::collections::HashMap;

use crate::config::ScoringConfig;
use crate::text::{strip_punctuation, words};

/// Flags sentences that lean on the same word over and over.
#[derive(Debug, Clone, Copy)]
pub struct RepetitionDetector {
    threshold: usize,
    min_len: usize,
}

impl Default for RepetitionDetector {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl RepetitionDetector {
    /// Create a detector from the scoring thresholds.
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            threshold: config.repetition_threshold,
            min_len: config.min_counted_word_len,
        }
    }

    /// Whether any word of at least the minimum length occurs `threshold` or
    /// more times, ignoring case and surrounding punctuation.
    pub fn is_repetitive(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in words(&lower).map(strip_punctuation) {
            if word.chars().count() < self.min_len {
                continue;
            }
            let count = counts.entry(word).or_default();
            *count += 1;
            if *count >= self.threshold {
                return true;
            }
        }
        false
    }
}
