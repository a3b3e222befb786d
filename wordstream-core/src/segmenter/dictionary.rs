//! Forward maximum matching segmenter

use super::{Lexicon, SegmentTagger};
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9０-９]+([.,．][0-9０-９]+)*$").expect("numeral pattern is valid")
});

static FOREIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("foreign pattern is valid"));

const CJK_PUNCTUATION: &str = "。，、！？；：「」『』（）《》〈〉【】…—～·“”‘’";

/// Dictionary-based segmenter and tagger
///
/// Segmentation scans left to right and takes the longest lexicon word
/// starting at each position. Runs of ASCII letters and digits always form a
/// single word, whitespace is dropped, and an unmatched character becomes a
/// word on its own.
#[derive(Debug, Clone, Default)]
pub struct DictionarySegmenter {
    lexicon: Lexicon,
}

impl DictionarySegmenter {
    /// Create a segmenter over a lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Segmenter over the embedded lexicon
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Lexicon::embedded()?))
    }

    /// The underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn longest_match(&self, chars: &[char]) -> usize {
        let max = self.lexicon.max_word_len().min(chars.len());
        (2..=max)
            .rev()
            .find(|&n| {
                let candidate: String = chars[..n].iter().collect();
                self.lexicon.contains(&candidate)
            })
            .unwrap_or(1)
    }

    fn tag_word(&self, word: &str) -> String {
        if let Some(pos) = self.lexicon.lookup(word) {
            return pos.to_string();
        }
        if word.chars().any(|c| c.is_ascii_uppercase()) {
            if let Some(pos) = self.lexicon.lookup(&word.to_ascii_lowercase()) {
                return pos.to_string();
            }
        }

        let tags = self.lexicon.fallback_tags();
        if NUMERAL.is_match(word) {
            tags.numeral.clone()
        } else if FOREIGN.is_match(word) {
            tags.foreign.clone()
        } else if word.chars().all(is_punctuation) {
            tags.punctuation.clone()
        } else {
            tags.unknown.clone()
        }
    }
}

fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation() || CJK_PUNCTUATION.contains(ch)
}

impl SegmentTagger for DictionarySegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = text.chars().collect();
        let mut words = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if ch.is_whitespace() {
                i += 1;
                continue;
            }

            let len = if ch.is_ascii_alphanumeric() {
                chars[i..]
                    .iter()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .count()
            } else {
                self.longest_match(&chars[i..])
            };

            words.push(chars[i..i + len].iter().collect());
            i += len;
        }

        Ok(words)
    }

    fn tag(&self, words: &[String]) -> Result<Vec<String>> {
        Ok(words.iter().map(|w| self.tag_word(w)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> DictionarySegmenter {
        DictionarySegmenter::embedded().unwrap()
    }

    #[test]
    fn test_longest_match_wins() {
        let words = segmenter().segment("我们喜欢自然语言处理").unwrap();
        assert_eq!(words, vec!["我们", "喜欢", "自然语言", "处理"]);
    }

    #[test]
    fn test_unknown_characters_split_individually() {
        let words = segmenter().segment("鹦鹉").unwrap();
        assert_eq!(words, vec!["鹦", "鹉"]);
    }

    #[test]
    fn test_mixed_script_and_whitespace() {
        let words = segmenter().segment("我 在 Fudan 学习NLP 2024。").unwrap();
        assert_eq!(
            words,
            vec!["我", "在", "Fudan", "学习", "NLP", "2024", "。"]
        );
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(segmenter().segment("").unwrap().is_empty());
        assert!(segmenter().segment("  \t").unwrap().is_empty());
    }

    #[test]
    fn test_tag_fallbacks() {
        let words: Vec<String> = ["The", "Fudan", "2024", "３．５", "。", "?", "鹦"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tags = segmenter().tag(&words).unwrap();
        assert_eq!(tags, vec!["DET", "X", "NUM", "NUM", "PUNCT", "PUNCT", "X"]);
    }

    #[test]
    fn test_tag_preserves_length() {
        let seg = segmenter();
        let words = seg.segment("北京大学的学生很好!").unwrap();
        let tags = seg.tag(&words).unwrap();
        assert_eq!(words.len(), tags.len());
        assert_eq!(words[0], "北京大学");
        assert_eq!(tags[0], "PROPN");
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = Lexicon::new("custom");
        lexicon.insert("天气", "NOUN");
        let seg = DictionarySegmenter::new(lexicon);
        assert_eq!(seg.segment("天气晴").unwrap(), vec!["天气", "晴"]);
        assert_eq!(seg.lexicon().name(), "custom");
    }
}
