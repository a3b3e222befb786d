//! Token and unit types shared by the adapter and its collaborators

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sentence-granularity token pulled from an upstream source
///
/// Offsets are character positions in the original document, half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceUnit {
    /// The sentence text as seen by the upstream source
    pub text: String,
    /// Start offset in the original text
    pub start: usize,
    /// End offset in the original text
    pub end: usize,
}

impl SentenceUnit {
    /// Create a new sentence unit
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Whether the recorded span matches the text length
    ///
    /// A mismatch means the upstream token was substituted (a synonym or a
    /// normalized form), so its span cannot be divided between words.
    pub fn offsets_authentic(&self) -> bool {
        self.start + self.text.chars().count() == self.end
    }
}

/// One segmented word paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUnit {
    /// Word text
    pub word: String,
    /// Part-of-speech tag
    pub pos: String,
}

impl WordUnit {
    /// Pair a word with its tag
    pub fn new(word: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
        }
    }

    /// Length of the word in characters
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}

/// Granularity marker carried by emitted tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Word granularity
    #[default]
    Word,
}

impl TokenType {
    /// Label used by downstream consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Word => "word",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word-granularity token emitted by [`crate::WordTokenFilter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    /// Word text
    pub text: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Start offset in the original text
    pub start: usize,
    /// End offset in the original text
    pub end: usize,
    /// Granularity marker, always [`TokenType::Word`]
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl WordToken {
    /// Create a word token
    pub fn new(text: impl Into<String>, pos: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            start,
            end,
            token_type: TokenType::Word,
        }
    }

    /// The `(start, end)` span
    pub fn offsets(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
