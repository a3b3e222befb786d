//! Upstream sentence sources
//!
//! The adapter pulls one [`SentenceUnit`] at a time from a [`SentenceSource`].
//! Two sources are provided: an in-memory list and a terminator-based
//! splitter over a whole document.

use crate::config::SourceConfig;
use crate::error::Result;
use crate::types::SentenceUnit;

/// Pull-based source of sentence units
pub trait SentenceSource {
    /// Pull the next sentence, or `None` when the source is exhausted
    fn next_sentence(&mut self) -> Result<Option<SentenceUnit>>;

    /// Rewind the source so it can be consumed again
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: SentenceSource + ?Sized> SentenceSource for Box<S> {
    fn next_sentence(&mut self) -> Result<Option<SentenceUnit>> {
        (**self).next_sentence()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

/// In-memory sentence source
#[derive(Debug, Clone, Default)]
pub struct VecSentenceSource {
    units: Vec<SentenceUnit>,
    position: usize,
}

impl VecSentenceSource {
    /// Create a source over the given units
    pub fn new(units: Vec<SentenceUnit>) -> Self {
        Self { units, position: 0 }
    }

    /// Number of units not yet pulled
    pub fn remaining(&self) -> usize {
        self.units.len() - self.position
    }
}

impl From<Vec<SentenceUnit>> for VecSentenceSource {
    fn from(units: Vec<SentenceUnit>) -> Self {
        Self::new(units)
    }
}

impl SentenceSource for VecSentenceSource {
    fn next_sentence(&mut self) -> Result<Option<SentenceUnit>> {
        let unit = self.units.get(self.position).cloned();
        if unit.is_some() {
            self.position += 1;
        }
        Ok(unit)
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }
}

/// Splits a document into sentences at terminator characters
///
/// Consecutive terminators stay with their sentence (`"Really?!"`), leading
/// and trailing whitespace is excluded from each unit, and offsets are
/// character positions in the document.
#[derive(Debug, Clone)]
pub struct TextSentenceSource {
    text: String,
    terminators: Vec<char>,
    split_on_newline: bool,
    byte_pos: usize,
    char_pos: usize,
}

impl TextSentenceSource {
    /// Create a splitter with the default terminators
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, &SourceConfig::default())
    }

    /// Create a splitter from a source configuration
    pub fn with_config(text: impl Into<String>, config: &SourceConfig) -> Self {
        Self {
            text: text.into(),
            terminators: config.terminators.clone(),
            split_on_newline: config.split_on_newline,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// The document being split
    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }
}

impl SentenceSource for TextSentenceSource {
    fn next_sentence(&mut self) -> Result<Option<SentenceUnit>> {
        let rest = &self.text[self.byte_pos..];
        let mut chars = rest.char_indices().peekable();

        let mut skipped = 0;
        let mut begin = rest.len();
        while let Some(&(i, ch)) = chars.peek() {
            if !ch.is_whitespace() {
                begin = i;
                break;
            }
            skipped += 1;
            chars.next();
        }

        if begin == rest.len() {
            self.char_pos += skipped;
            self.byte_pos = self.text.len();
            return Ok(None);
        }

        let mut stop = rest.len();
        let mut seen_terminator = false;
        while let Some(&(i, ch)) = chars.peek() {
            if self.is_terminator(ch) {
                seen_terminator = true;
            } else if seen_terminator || (ch == '\n' && self.split_on_newline) {
                stop = i;
                break;
            }
            chars.next();
        }

        let span = &rest[begin..stop];
        let sentence = span.trim_end();
        let start = self.char_pos + skipped;
        let unit = SentenceUnit::new(sentence, start, start + sentence.chars().count());

        self.char_pos = start + span.chars().count();
        self.byte_pos += stop;

        Ok(Some(unit))
    }

    fn reset(&mut self) -> Result<()> {
        self.byte_pos = 0;
        self.char_pos = 0;
        Ok(())
    }
}
