//! Sentence scoring for QuicklyMe.
//!
//! Text is split into sentences, each sentence is checked for validity
//! (length, language, dictionary coverage) and repetition, and the points are
//! summed. The validator, dictionary, and language detector are traits so a
//! front end can plug in a platform spell checker or language recognizer.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod language;
pub mod repetition;
pub mod segmenter;
pub mod text;
pub mod validator;

pub use config::ScoringConfig;
pub use dictionary::{Dictionary, WordList};
pub use engine::{ScoreResult, ScoringEngine, SentenceReport};
pub use language::{Language, LanguageDetector, StopwordDetector};
pub use repetition::RepetitionDetector;
pub use segmenter::SentenceSegmenter;
pub use validator::{EnglishValidator, SentenceValidator};
