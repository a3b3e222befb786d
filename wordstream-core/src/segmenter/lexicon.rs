//! Lexicon for the dictionary segmenter
//!
//! A lexicon maps words to part-of-speech tags and carries the fallback tags
//! used for words it does not contain. It is stored as TOML:
//!
//! ```toml
//! [metadata]
//! name = "custom"
//!
//! [tags]
//! unknown = "X"
//!
//! [entries]
//! NOUN = ["cat", "猫"]
//! VERB = ["sat"]
//! ```

use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

const EMBEDDED_LEXICON: &str = include_str!("../../configs/lexicon/default.toml");

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconMetadata {
    /// Lexicon name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Tags for words missing from the lexicon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackTags {
    /// Tag for anything not covered below
    #[serde(default = "default_unknown")]
    pub unknown: String,
    /// Tag for numbers
    #[serde(default = "default_numeral")]
    pub numeral: String,
    /// Tag for Latin-script words
    #[serde(default = "default_unknown")]
    pub foreign: String,
    /// Tag for punctuation
    #[serde(default = "default_punctuation")]
    pub punctuation: String,
}

impl Default for FallbackTags {
    fn default() -> Self {
        Self {
            unknown: default_unknown(),
            numeral: default_numeral(),
            foreign: default_unknown(),
            punctuation: default_punctuation(),
        }
    }
}

fn default_unknown() -> String {
    "X".to_string()
}

fn default_numeral() -> String {
    "NUM".to_string()
}

fn default_punctuation() -> String {
    "PUNCT".to_string()
}

/// On-disk lexicon layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LexiconFile {
    metadata: LexiconMetadata,
    #[serde(default)]
    tags: FallbackTags,
    #[serde(default)]
    entries: BTreeMap<String, Vec<String>>,
}

/// Word to part-of-speech lookup table
#[derive(Debug, Clone)]
pub struct Lexicon {
    metadata: LexiconMetadata,
    tags: FallbackTags,
    words: HashMap<String, String>,
    max_word_len: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new("empty")
    }
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: LexiconMetadata {
                name: name.into(),
                description: None,
            },
            tags: FallbackTags::default(),
            words: HashMap::new(),
            max_word_len: 0,
        }
    }

    /// The lexicon bundled with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_LEXICON)
    }

    /// Parse a lexicon from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LexiconFile =
            toml::from_str(content).map_err(|e| StreamError::Lexicon(e.to_string()))?;

        let mut lexicon = Self {
            metadata: file.metadata,
            tags: file.tags,
            words: HashMap::new(),
            max_word_len: 0,
        };

        for (pos, words) in file.entries {
            if pos.trim().is_empty() {
                return Err(StreamError::Lexicon("empty part-of-speech tag".to_string()));
            }
            for word in words {
                if word.is_empty() || word.chars().any(char::is_whitespace) {
                    return Err(StreamError::Lexicon(format!(
                        "invalid word {word:?} under {pos}"
                    )));
                }
                if let Some(previous) = lexicon.words.get(&word) {
                    return Err(StreamError::Lexicon(format!(
                        "word {word:?} listed under both {previous} and {pos}"
                    )));
                }
                lexicon.insert(word, pos.clone());
            }
        }

        Ok(lexicon)
    }

    /// Load a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            StreamError::Lexicon(msg) => {
                StreamError::Lexicon(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Add or replace a word
    pub fn insert(&mut self, word: impl Into<String>, pos: impl Into<String>) {
        let word = word.into();
        self.max_word_len = self.max_word_len.max(word.chars().count());
        self.words.insert(word, pos.into());
    }

    /// Replace the fallback tags
    pub fn with_fallback_tags(mut self, tags: FallbackTags) -> Self {
        self.tags = tags;
        self
    }

    /// Tag of a word, if present
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Whether the word is present
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Distinct part-of-speech tags, sorted
    pub fn pos_tags(&self) -> Vec<&str> {
        self.words
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Length in characters of the longest word
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Fallback tags
    pub fn fallback_tags(&self) -> &FallbackTags {
        &self.tags
    }

    /// Lexicon name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
