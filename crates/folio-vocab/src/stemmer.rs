//! Snowball stemmer implementation

use folio_domain::traits::Stemmer;
use rust_stemmers::Algorithm;

/// English Snowball stemmer.
///
/// Deterministic: the same input always produces the same stem. Input is
/// expected to be lowercase; callers lowercase before stemming so that the
/// whitelist and the tokenizer agree on stem forms.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Create an English stemmer
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}
