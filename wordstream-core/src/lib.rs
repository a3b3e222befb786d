//! Word-level token streams over sentence tokenizers
//!
//! This crate turns a stream of sentence tokens into a stream of word tokens
//! carrying part-of-speech tags and character offsets, and provides a
//! sequential reader over pre-segmented corpora.
//!
//! ```
//! use wordstream_core::{TextSentenceSource, WordTokenFilter};
//!
//! let source = TextSentenceSource::new("the cat sat");
//! let mut filter = WordTokenFilter::with_shared(source);
//!
//! let token = filter.next_token().unwrap().unwrap();
//! assert_eq!((token.text.as_str(), token.pos.as_str()), ("the", "DET"));
//! assert_eq!((token.start, token.end), (0, 3));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filter;
pub mod reader;
pub mod segmenter;
pub mod source;
pub mod types;

// Re-export key types
pub use config::{OutputConfig, SegmenterConfig, SourceConfig, WordStreamConfig};
pub use error::{Result, StreamError};
pub use filter::WordTokenFilter;
pub use reader::{Instance, InstanceReader, ListReader};
pub use segmenter::{shared, DictionarySegmenter, Lexicon, SegmentTagger};
pub use source::{SentenceSource, TextSentenceSource, VecSentenceSource};
pub use types::{SentenceUnit, TokenType, WordToken, WordUnit};
