//! End-to-end tests for the sentence-to-word pipeline

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wordstream_core::{
    InstanceReader, ListReader, Result, SegmentTagger, SentenceSource, SentenceUnit, StreamError,
    TextSentenceSource, VecSentenceSource, WordToken, WordTokenFilter,
};

/// Returns canned segmentation and tagging results and counts calls
struct ScriptedSegmenter {
    words: Vec<&'static str>,
    tags: Vec<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedSegmenter {
    fn new(words: Vec<&'static str>, tags: Vec<&'static str>) -> Self {
        Self {
            words,
            tags,
            calls: AtomicUsize::new(0),
        }
    }
}

impl SegmentTagger for ScriptedSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.words.iter().map(|w| w.to_string()).collect())
    }

    fn tag(&self, words: &[String]) -> Result<Vec<String>> {
        Ok(self.tags[..words.len().min(self.tags.len())]
            .iter()
            .map(|t| t.to_string())
            .collect())
    }
}

/// Fails every call
struct BrokenSegmenter;

impl SegmentTagger for BrokenSegmenter {
    fn segment(&self, _text: &str) -> Result<Vec<String>> {
        Err(StreamError::Segmentation {
            reason: "model not loaded".to_string(),
        })
    }

    fn tag(&self, _words: &[String]) -> Result<Vec<String>> {
        Err(StreamError::Tagging {
            reason: "model not loaded".to_string(),
        })
    }
}

/// Yields one sentence, then fails
struct FlakySource {
    pulled: bool,
}

impl SentenceSource for FlakySource {
    fn next_sentence(&mut self) -> Result<Option<SentenceUnit>> {
        if self.pulled {
            return Err(StreamError::Upstream {
                reason: "connection reset".to_string(),
            });
        }
        self.pulled = true;
        Ok(Some(SentenceUnit::new("the cat sat", 0, 11)))
    }
}

fn drain<S: SentenceSource>(filter: &mut WordTokenFilter<S>) -> Vec<WordToken> {
    let mut tokens = Vec::new();
    while let Some(token) = filter.next_token().unwrap() {
        tokens.push(token);
    }
    tokens
}

fn cat_sat() -> Arc<ScriptedSegmenter> {
    Arc::new(ScriptedSegmenter::new(
        vec!["the", "cat", "sat"],
        vec!["DET", "NOUN", "VERB"],
    ))
}

#[test]
fn test_the_cat_sat() {
    let source = VecSentenceSource::new(vec![SentenceUnit::new("the cat sat", 0, 11)]);
    let mut filter = WordTokenFilter::new(source, cat_sat());

    let tokens = drain(&mut filter);

    // Cursor advances by word length only; the spaces are not represented.
    assert_eq!(
        tokens,
        vec![
            WordToken::new("the", "DET", 0, 3),
            WordToken::new("cat", "NOUN", 3, 6),
            WordToken::new("sat", "VERB", 6, 9),
        ]
    );
}

#[test]
fn test_substituted_sentence_keeps_original_span() {
    // "the cat sat" recorded over a 30 character span
    let source = VecSentenceSource::new(vec![SentenceUnit::new("the cat sat", 100, 130)]);
    let mut filter = WordTokenFilter::new(source, cat_sat());

    let tokens = drain(&mut filter);
    assert_eq!(tokens.len(), 3);
    for token in &tokens {
        assert_eq!(token.offsets(), (100, 130));
    }
    assert_eq!(tokens[2].pos, "VERB");
}

#[test]
fn test_empty_segmentation_ends_stream_early() {
    let segmenter = cat_sat();
    let source = VecSentenceSource::new(vec![
        SentenceUnit::new("the cat sat", 0, 11),
        SentenceUnit::new("   ", 12, 15),
        SentenceUnit::new("the cat sat", 16, 27),
    ]);
    let mut filter = WordTokenFilter::new(source, segmenter.clone());

    // The third sentence is never reached by a consumer that stops at the
    // first end-of-stream.
    let tokens = drain(&mut filter);
    assert_eq!(tokens.len(), 3);
    assert_eq!(filter.get_ref().remaining(), 1);
    assert_eq!(segmenter.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_reset_reproduces_output() {
    let units = vec![
        SentenceUnit::new("the cat sat", 0, 11),
        SentenceUnit::new("the cat sat", 12, 40),
    ];
    let segmenter = cat_sat();

    let mut fresh = WordTokenFilter::new(VecSentenceSource::new(units.clone()), segmenter.clone());
    let expected = drain(&mut fresh);

    let mut reused = WordTokenFilter::new(VecSentenceSource::new(units), segmenter.clone());
    // Stop part-way through the first sentence.
    reused.next_token().unwrap();
    reused.reset().unwrap();

    assert_eq!(drain(&mut reused), expected);
    assert_eq!(expected.len(), 6);
}

#[test]
fn test_reset_does_not_recreate_segmenter() {
    let segmenter: Arc<dyn SegmentTagger> = cat_sat();
    let source = VecSentenceSource::new(vec![SentenceUnit::new("the cat sat", 0, 11)]);
    let mut filter = WordTokenFilter::new(source, Arc::clone(&segmenter));

    drain(&mut filter);
    filter.reset().unwrap();
    assert!(Arc::ptr_eq(filter.segmenter(), &segmenter));
}

#[test]
fn test_segmenter_failure_propagates() {
    let source = VecSentenceSource::new(vec![SentenceUnit::new("the cat sat", 0, 11)]);
    let mut filter = WordTokenFilter::new(source, Arc::new(BrokenSegmenter));

    let err = filter.next_token().unwrap_err();
    assert!(matches!(err, StreamError::Segmentation { .. }));
}

#[test]
fn test_upstream_failure_propagates() {
    let mut filter = WordTokenFilter::new(FlakySource { pulled: false }, cat_sat());

    assert_eq!(drain_ok(&mut filter, 3).len(), 3);
    let err = filter.next_token().unwrap_err();
    assert_eq!(err.to_string(), "upstream source error: connection reset");
}

fn drain_ok<S: SentenceSource>(filter: &mut WordTokenFilter<S>, n: usize) -> Vec<WordToken> {
    (0..n)
        .map(|_| filter.next_token().unwrap().unwrap())
        .collect()
}

#[test]
fn test_tag_count_mismatch_is_an_error() {
    let segmenter = Arc::new(ScriptedSegmenter::new(
        vec!["the", "cat", "sat"],
        vec!["DET", "NOUN"],
    ));
    let source = VecSentenceSource::new(vec![SentenceUnit::new("the cat sat", 0, 11)]);
    let mut filter = WordTokenFilter::new(source, segmenter);

    let err = filter.next_token().unwrap_err();
    assert!(matches!(
        err,
        StreamError::TagCountMismatch { words: 3, tags: 2 }
    ));
}

#[test]
fn test_shared_segmenter_over_chinese_document() {
    let source = TextSentenceSource::new("我们喜欢自然语言处理。北京大学很大！");
    let filter = WordTokenFilter::with_shared(source);

    let tokens: Vec<WordToken> = filter.collect::<Result<_>>().unwrap();
    let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        words,
        vec!["我们", "喜欢", "自然语言", "处理", "。", "北京大学", "很", "大", "！"]
    );

    // No whitespace in the text, so offsets partition it exactly.
    assert_eq!(tokens[0].offsets(), (0, 2));
    assert_eq!(tokens[4].offsets(), (10, 11));
    assert_eq!(tokens[5].offsets(), (11, 15));
    assert_eq!(tokens.last().unwrap().offsets(), (17, 18));
    assert_eq!(tokens[5].pos, "PROPN");
    assert_eq!(tokens[4].pos, "PUNCT");
}

#[test]
fn test_reader_example() {
    let mut reader = ListReader::new(vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string()],
    ]);

    assert!(reader.has_next());
    let first = reader.next_instance();
    assert_eq!(first.data, vec!["a", "b"]);
    assert_eq!(first.label, None);

    assert!(reader.has_next());
    let second = reader.next_instance();
    assert_eq!(second.data, vec!["c"]);
    assert_eq!(second.label, None);

    assert!(!reader.has_next());
}
