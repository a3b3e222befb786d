//! Sentence-to-word token filter
//!
//! [`WordTokenFilter`] pulls sentence units from an upstream
//! [`SentenceSource`], segments and tags each one, and hands the words out
//! one at a time as fresh [`WordToken`]s.
//!
//! Word offsets are computed by advancing a cursor by each word's length in
//! characters, starting at the sentence start. Whitespace or other text the
//! segmenter drops between words is not accounted for, so for `"the cat sat"`
//! at `[0, 11)` the words come out as `[0, 3)`, `[3, 6)` and `[6, 9)`.
//! Sentences whose span does not match their text length (substituted or
//! normalized tokens) cannot be divided, and every word of such a sentence
//! carries the whole sentence span.

use crate::error::{Result, StreamError};
use crate::segmenter::{self, SegmentTagger};
use crate::source::SentenceSource;
use crate::types::{SentenceUnit, WordToken, WordUnit};
use std::sync::Arc;

/// Buffered words of the sentence being drained
#[derive(Debug, Clone)]
struct SentenceBuffer {
    words: Vec<WordUnit>,
    index: usize,
    cursor: usize,
    start: usize,
    end: usize,
    offsets_authentic: bool,
}

impl SentenceBuffer {
    /// Build the buffer, or `None` when there is nothing to drain
    fn new(unit: &SentenceUnit, words: Vec<WordUnit>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            index: 0,
            cursor: unit.start,
            start: unit.start,
            end: unit.end,
            offsets_authentic: unit.offsets_authentic(),
        })
    }

    /// Emit the word at the current index and advance
    fn emit(&mut self) -> WordToken {
        let unit = &self.words[self.index];
        let end = self.cursor + unit.char_len();
        let token = if self.offsets_authentic {
            WordToken::new(unit.word.clone(), unit.pos.clone(), self.cursor, end)
        } else {
            WordToken::new(unit.word.clone(), unit.pos.clone(), self.start, self.end)
        };
        self.cursor = end;
        self.index += 1;
        token
    }

    fn is_drained(&self) -> bool {
        self.index >= self.words.len()
    }
}

/// Adapter state
#[derive(Debug, Clone, Default)]
enum FilterState {
    /// No buffered words, the next pull fetches a sentence
    #[default]
    Empty,
    /// At least one buffered word remains
    Draining(SentenceBuffer),
    /// Upstream is exhausted
    Done,
}

/// Re-emits sentence tokens as word tokens
///
/// Single-threaded and pull-based: each call to
/// [`next_token`](Self::next_token) blocks on the upstream source and the
/// segmenter as needed. The segmenter is shared and never recreated, not even
/// by [`reset`](Self::reset).
pub struct WordTokenFilter<S> {
    input: S,
    segmenter: Arc<dyn SegmentTagger>,
    state: FilterState,
}

impl<S> std::fmt::Debug for WordTokenFilter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordTokenFilter")
            .field("segmenter", &"<dyn SegmentTagger>")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S: SentenceSource> WordTokenFilter<S> {
    /// Create a filter over `input` using the given segmentation service
    pub fn new(input: S, segmenter: Arc<dyn SegmentTagger>) -> Self {
        Self {
            input,
            segmenter,
            state: FilterState::Empty,
        }
    }

    /// Create a filter using the process-wide shared segmenter
    pub fn with_shared(input: S) -> Self {
        Self::new(input, segmenter::shared())
    }

    /// Pull the next word token
    ///
    /// Returns `Ok(None)` at the end of the stream. Errors from the source,
    /// the segmenter or the tagger are returned as-is.
    ///
    /// If a sentence segments into zero words this also returns `Ok(None)`,
    /// even when more sentences are available upstream. Callers that stop at
    /// the first `None` therefore lose the rest of the stream.
    pub fn next_token(&mut self) -> Result<Option<WordToken>> {
        if matches!(self.state, FilterState::Empty) {
            match self.input.next_sentence()? {
                Some(unit) => match self.fill(&unit)? {
                    Some(buffer) => self.state = FilterState::Draining(buffer),
                    None => {
                        log::warn!(
                            "Sentence at [{}, {}) produced no words, ending stream",
                            unit.start,
                            unit.end
                        );
                        return Ok(None);
                    }
                },
                None => {
                    log::debug!("Upstream exhausted");
                    self.state = FilterState::Done;
                }
            }
        }

        let FilterState::Draining(buffer) = &mut self.state else {
            return Ok(None);
        };

        let token = buffer.emit();
        log::trace!(
            "Emitting {:?}/{} at [{}, {})",
            token.text,
            token.pos,
            token.start,
            token.end
        );
        if buffer.is_drained() {
            self.state = FilterState::Empty;
        }

        Ok(Some(token))
    }

    /// Return to the initial state and reset the upstream source
    pub fn reset(&mut self) -> Result<()> {
        self.state = FilterState::Empty;
        self.input.reset()
    }

    fn fill(&self, unit: &SentenceUnit) -> Result<Option<SentenceBuffer>> {
        log::debug!(
            "Segmenting sentence at [{}, {}): {:?}",
            unit.start,
            unit.end,
            unit.text
        );

        let words = self.segmenter.segment(&unit.text)?;
        let tags = self.segmenter.tag(&words)?;
        if words.len() != tags.len() {
            return Err(StreamError::TagCountMismatch {
                words: words.len(),
                tags: tags.len(),
            });
        }

        let units = words
            .into_iter()
            .zip(tags)
            .map(|(word, pos)| WordUnit { word, pos })
            .collect();

        Ok(SentenceBuffer::new(unit, units))
    }
}

impl<S> WordTokenFilter<S> {
    /// The shared segmentation service
    pub fn segmenter(&self) -> &Arc<dyn SegmentTagger> {
        &self.segmenter
    }

    /// Borrow the upstream source
    pub fn get_ref(&self) -> &S {
        &self.input
    }

    /// Consume the filter, returning the upstream source
    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S: SentenceSource> Iterator for WordTokenFilter<S> {
    type Item = Result<WordToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
