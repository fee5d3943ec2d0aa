use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntryId;

/// The text a player writes against one prompt, with its latest score.
///
/// `id`, `created_at`, and `prompt` are fixed at creation. Text, score, and
/// sentence count are replaced together on every edit via [`JournalEntry::record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    id: EntryId,
    created_at: DateTime<Utc>,
    prompt: String,
    text: String,
    score: u32,
    sentence_count: u32,
}

impl JournalEntry {
    /// Start an empty entry for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            created_at: Utc::now(),
            prompt: prompt.into(),
            text: String::new(),
            score: 0,
            sentence_count: 0,
        }
    }

    /// Replace the text and its derived score in one step.
    pub fn record(&mut self, text: impl Into<String>, score: u32, sentence_count: u32) {
        self.text = text.into();
        self.score = score;
        self.sentence_count = sentence_count;
    }

    /// The entry's identifier.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// When the entry was started.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The prompt the player is writing about.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Score for the current text.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of segmented sentences in the current text.
    pub fn sentence_count(&self) -> u32 {
        self.sentence_count
    }
}
