//! Integration tests for the extraction pipeline
//!
//! These run raw bytes through boundary extraction and tokenization
//! together, the way the orchestrator does per document.

use folio_domain::traits::Stemmer;
use folio_extractor::{BoundaryExtractor, ExtractError, ExtractorConfig, ParagraphTokenizer};
use folio_vocab::{SnowballStemmer, Whitelist};

fn whitelist_of(words: &[&str]) -> Whitelist {
    let stemmer = SnowballStemmer::english();
    words.iter().map(|w| stemmer.stem(w)).collect()
}

#[test]
fn test_single_paragraph_document() {
    let raw = b"noise *** START OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\
\n\
Hello world. Great day.\n\
\n\
*** END OF THE PROJECT GUTENBERG EBOOK SAMPLE";

    let body = BoundaryExtractor::extract(raw).unwrap();

    let whitelist = whitelist_of(&["hello", "world", "great", "day"]);
    let tokenizer =
        ParagraphTokenizer::new(SnowballStemmer::english(), ExtractorConfig::default());
    let paragraphs = tokenizer.tokenize(&body, &whitelist);

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text, "Hello world. Great day.");
    assert_eq!(paragraphs[0].words.get("hello"), 1);
    assert_eq!(paragraphs[0].words.get("world"), 1);
    assert_eq!(paragraphs[0].words.get("great"), 1);
    assert_eq!(paragraphs[0].words.get("day"), 1);
}

#[test]
fn test_no_start_marker_produces_no_output() {
    let raw = b"just some text with no markers at all";
    assert!(matches!(
        BoundaryExtractor::extract(raw),
        Err(ExtractError::BoundaryNotFound { start: None, end: None })
    ));
}

#[test]
fn test_end_marker_before_start_is_empty_body() {
    let raw = b"*** END OF THE PROJECT GUTENBERG EBOOK X\n\
*** START OF THE PROJECT GUTENBERG EBOOK X ***\n";
    assert!(matches!(
        BoundaryExtractor::extract(raw),
        Err(ExtractError::EmptyBody)
    ));
}

#[test]
fn test_multi_paragraph_order_and_filtering() {
    let raw = b"*** START OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\
\n\
The whale surfaced near the whale boat.\n\
\n\
Zzzz qqq xxx.\n\
\n\
The ship sailed the ocean.\n\
\n\
*** END OF THE PROJECT GUTENBERG EBOOK SAMPLE";

    let body = BoundaryExtractor::extract(raw).unwrap();
    let whitelist = whitelist_of(&["whale", "boat", "ship", "ocean", "sail"]);
    let tokenizer =
        ParagraphTokenizer::new(SnowballStemmer::english(), ExtractorConfig::default());
    let paragraphs = tokenizer.tokenize(&body, &whitelist);

    // The middle candidate has no whitelisted words and is discarded
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0].text.starts_with("The whale"));
    assert!(paragraphs[1].text.starts_with("The ship"));
}

#[test]
fn test_invalid_bytes_survive_as_placeholders() {
    let mut raw = Vec::new();
    raw.extend_from_slice(b"*** START OF THE PROJECT GUTENBERG EBOOK X ***\n\nwhale ");
    raw.extend_from_slice(&[0xFF, 0xFE]);
    raw.extend_from_slice(b" whale\n\n*** END OF THE PROJECT GUTENBERG EBOOK");

    let body = BoundaryExtractor::extract(&raw).unwrap();
    assert!(body.contains('?'));

    let whitelist = whitelist_of(&["whale"]);
    let tokenizer =
        ParagraphTokenizer::new(SnowballStemmer::english(), ExtractorConfig::default());
    let paragraphs = tokenizer.tokenize(&body, &whitelist);
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].words.get("whale"), 2);
}

#[test]
fn test_retained_end_marker_byte_does_not_create_words() {
    // The quirk byte ("*") forms a final candidate of pure punctuation,
    // which can never reach the retention threshold.
    let raw = b"*** START OF THE PROJECT GUTENBERG EBOOK X ***\n\
\n\
whale whale\n\
\n\
*** END OF THE PROJECT GUTENBERG EBOOK";

    let body = BoundaryExtractor::extract(raw).unwrap();
    assert!(body.ends_with('*'));

    let whitelist = whitelist_of(&["whale"]);
    let tokenizer =
        ParagraphTokenizer::new(SnowballStemmer::english(), ExtractorConfig::default());
    let paragraphs = tokenizer.tokenize(&body, &whitelist);

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text, "whale whale");
}
