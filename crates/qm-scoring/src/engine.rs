//! Full-text scoring.
//!
//! Every call rescores the whole text from scratch, so the result depends on
//! nothing but the text and the configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::repetition::RepetitionDetector;
use crate::segmenter::SentenceSegmenter;
use crate::validator::{EnglishValidator, SentenceValidator};

/// The outcome of scoring one version of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Total points, never negative.
    pub score: u32,
    /// Number of segmented sentences, valid or not.
    pub sentence_count: u32,
    /// The sentence count equals the milestone count in this computation.
    pub milestone_just_reached: bool,
}

/// How a single sentence was judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceReport {
    /// The trimmed sentence text.
    pub text: String,
    /// Passed the validator.
    pub valid: bool,
    /// Repeats a word. Only evaluated for valid sentences.
    pub repetitive: bool,
    /// Points this sentence contributed.
    pub points: i64,
}

/// Scores journal text sentence by sentence.
pub struct ScoringEngine {
    segmenter: SentenceSegmenter,
    validator: Box<dyn SentenceValidator>,
    repetition: RepetitionDetector,
    config: ScoringConfig,
}

impl std::fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    /// Create an engine with the default English validator.
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
            validator: Box::new(EnglishValidator::new(&config)),
            repetition: RepetitionDetector::new(&config),
            config,
        }
    }

    /// Replace the sentence validator.
    pub fn with_validator(mut self, validator: impl SentenceValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Judge every sentence of `text` in document order.
    pub fn analyze(&self, text: &str) -> Vec<SentenceReport> {
        self.segmenter
            .segment(text)
            .into_iter()
            .map(|sentence| self.judge(sentence))
            .collect()
    }

    /// Score the whole text.
    pub fn calculate_score(&self, text: &str) -> ScoreResult {
        let reports = self.analyze(text);
        let total: i64 = reports.iter().map(|r| r.points).sum();
        let sentence_count = reports.len();

        let result = ScoreResult {
            score: u32::try_from(total.max(0)).unwrap_or(u32::MAX),
            sentence_count: u32::try_from(sentence_count).unwrap_or(u32::MAX),
            milestone_just_reached: sentence_count == self.config.milestone_sentences,
        };
        debug!(
            score = result.score,
            sentences = result.sentence_count,
            milestone = result.milestone_just_reached,
            "scored text"
        );
        result
    }

    fn judge(&self, sentence: &str) -> SentenceReport {
        let valid = self.validator.is_valid(sentence);
        let repetitive = valid && self.repetition.is_repetitive(sentence);
        let points = match (valid, repetitive) {
            (false, _) => 0,
            (true, false) => self.config.points_per_sentence,
            (true, true) => self.config.points_per_sentence - self.config.repetition_penalty,
        };
        SentenceReport {
            text: sentence.to_string(),
            valid,
            repetitive,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Accepts any sentence with at least three words.
    struct WordCount;

    impl SentenceValidator for WordCount {
        fn is_valid(&self, sentence: &str) -> bool {
            sentence.split_whitespace().count() >= 3
        }
    }

    fn engine() -> ScoringEngine {
        ScoringEngine::default().with_validator(WordCount)
    }

    fn sentences(n: usize) -> String {
        (0..n)
            .map(|i| format!("Sentence number {i} is here."))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn spec_example_with_default_validator() {
        let result = ScoringEngine::default()
            .calculate_score("The cat sat. The dog ran. Birds fly high today.");
        assert_eq!(
            result,
            ScoreResult {
                score: 9,
                sentence_count: 3,
                milestone_just_reached: false,
            }
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(engine().calculate_score(""), ScoreResult::default());
        assert_eq!(engine().calculate_score("  \n "), ScoreResult::default());
    }

    #[test]
    fn invalid_sentences_count_but_score_nothing() {
        let result = engine().calculate_score("Hi. Go now. Ok.");
        assert_eq!(result.score, 0);
        assert_eq!(result.sentence_count, 3);
    }

    #[test]
    fn repetition_costs_two_points() {
        let plain = engine().calculate_score("The dog chased a ball.");
        let repeated = engine().calculate_score("The dog chased the dog and the dog.");
        assert_eq!(plain.score, 3);
        assert_eq!(repeated.score, 1);
    }

    #[test]
    fn milestone_exactly_at_ten() {
        assert!(!engine().calculate_score(&sentences(9)).milestone_just_reached);
        let ten = engine().calculate_score(&sentences(10));
        assert!(ten.milestone_just_reached);
        assert_eq!(ten.sentence_count, 10);
        assert_eq!(ten.score, 30);
        assert!(!engine().calculate_score(&sentences(11)).milestone_just_reached);
    }

    #[test]
    fn milestone_counts_invalid_sentences() {
        let text = format!("{} Hi.", sentences(9));
        let result = engine().calculate_score(&text);
        assert_eq!(result.sentence_count, 10);
        assert_eq!(result.score, 27);
        assert!(result.milestone_just_reached);
    }

    #[test]
    fn flat_points_after_the_first_ten() {
        assert_eq!(engine().calculate_score(&sentences(12)).score, 36);
    }

    #[test]
    fn score_floors_at_zero() {
        let harsh = ScoringEngine::new(ScoringConfig::default().with_points(1, 5))
            .with_validator(WordCount);
        let result = harsh.calculate_score("The dog chased the dog and the dog.");
        assert_eq!(result.score, 0);
        assert_eq!(result.sentence_count, 1);
    }

    #[test]
    fn analyze_reports_each_sentence() {
        let reports = engine().analyze("The cat sat down. No. The dog chased the dog and the dog.");
        assert_eq!(reports.len(), 3);
        assert!(reports[0].valid && !reports[0].repetitive);
        assert_eq!(reports[0].points, 3);
        assert!(!reports[1].valid && !reports[1].repetitive);
        assert_eq!(reports[1].points, 0);
        assert!(reports[2].valid && reports[2].repetitive);
        assert_eq!(reports[2].points, 1);
    }

    #[test]
    fn score_result_json() {
        let json = serde_json::to_value(ScoreResult {
            score: 9,
            sentence_count: 3,
            milestone_just_reached: false,
        })
        .unwrap();
        assert_eq!(json["score"], 9);
        assert_eq!(json["sentenceCount"], 3);
        assert_eq!(json["milestoneJustReached"], false);
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(text in "\\PC{0,200}") {
            let engine = ScoringEngine::default();
            prop_assert_eq!(engine.calculate_score(&text), engine.calculate_score(&text));
        }

        #[test]
        fn count_matches_segmenter(text in "[a-z .!?\n]{0,200}") {
            let engine = engine();
            let segments = SentenceSegmenter::new().segment(&text).len();
            prop_assert_eq!(engine.calculate_score(&text).sentence_count as usize, segments);
        }

        #[test]
        fn score_bounded_by_sentences(text in "[A-Za-z ,.!?]{0,300}") {
            let result = ScoringEngine::default().calculate_score(&text);
            prop_assert!(result.score <= 3 * result.sentence_count);
        }
    }
}
