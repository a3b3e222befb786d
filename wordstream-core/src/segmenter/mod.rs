//! Word segmentation and part-of-speech tagging service
//!
//! The adapter treats segmentation as a black box behind [`SegmentTagger`].
//! One instance is shared by every adapter, so implementations must be safe
//! for repeated and concurrent use.

pub mod dictionary;
pub mod lexicon;

pub use dictionary::DictionarySegmenter;
pub use lexicon::{FallbackTags, Lexicon};

use crate::config::SegmenterConfig;
use crate::error::Result;
use std::sync::{Arc, OnceLock};

/// Segments sentence text into words and tags them
pub trait SegmentTagger: Send + Sync {
    /// Split text into an ordered sequence of words
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Tag words; the result has the same length and order as `words`
    fn tag(&self, words: &[String]) -> Result<Vec<String>>;
}

static SHARED: OnceLock<Arc<dyn SegmentTagger>> = OnceLock::new();

/// Process-wide segmenter built from the embedded lexicon on first use
pub fn shared() -> Arc<dyn SegmentTagger> {
    SHARED
        .get_or_init(|| {
            let lexicon = Lexicon::embedded().unwrap_or_else(|e| {
                log::warn!("Failed to load embedded lexicon, using an empty one: {e}");
                Lexicon::default()
            });
            log::debug!("Initialized shared segmenter ({} words)", lexicon.len());
            Arc::new(DictionarySegmenter::new(lexicon))
        })
        .clone()
}

/// Segmenter described by a configuration
///
/// A configured lexicon file gets its own segmenter; otherwise the shared
/// instance is returned.
pub fn from_config(config: &SegmenterConfig) -> Result<Arc<dyn SegmentTagger>> {
    match &config.lexicon {
        Some(path) => {
            let lexicon = Lexicon::from_file(path)?;
            log::info!(
                "Loaded lexicon '{}' ({} words) from {}",
                lexicon.name(),
                lexicon.len(),
                path.display()
            );
            Ok(Arc::new(DictionarySegmenter::new(lexicon)))
        }
        None => Ok(shared()),
    }
}
