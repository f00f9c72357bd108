//! Built-in stop-word list

use folio_domain::traits::Stemmer;
use std::collections::HashSet;

/// Common English function words excluded from the whitelist.
pub const STOP_WORDS: &[&str] = &[
    "a", "cannot", "into", "our", "thus", "about", "co", "is", "ours", "to", "above",
    "could", "it", "ourselves", "together", "across", "down", "its", "out", "too",
    "after", "during", "itself", "over", "toward", "afterwards", "each", "last", "own",
    "towards", "again", "eg", "latter", "per", "under", "against", "either", "latterly",
    "perhaps", "until", "all", "else", "least", "rather", "up", "almost", "elsewhere",
    "less", "same", "upon", "alone", "enough", "ltd", "seem", "us", "along", "etc",
    "many", "seemed", "very", "already", "even", "may", "seeming", "via", "also", "ever",
    "me", "seems", "was", "although", "every", "meanwhile", "several", "we", "always",
    "everyone", "might", "she", "well", "among", "everything", "more", "should", "were",
    "amongst", "everywhere", "moreover", "since", "what", "an", "except", "most", "so",
    "whatever", "and", "few", "mostly", "some", "when", "another", "first", "much",
    "somehow", "whence", "any", "for", "must", "someone", "whenever", "anyhow",
    "former", "my", "something", "where", "anyone", "formerly", "myself", "sometime",
    "whereafter", "anything", "from", "namely", "sometimes", "whereas", "anywhere",
    "further", "neither", "somewhere", "whereby", "are", "had", "never", "still",
    "wherein", "around", "has", "nevertheless", "such", "whereupon", "as", "have",
    "next", "than", "wherever", "at", "he", "no", "that", "whether", "be", "hence",
    "nobody", "the", "whither", "became", "her", "none", "their", "which", "because",
    "here", "noone", "them", "while", "become", "hereafter", "nor", "themselves", "who",
    "becomes", "hereby", "not", "then", "whoever", "becoming", "herein", "nothing",
    "thence", "whole", "been", "hereupon", "now", "there", "whom", "before", "hers",
    "nowhere", "thereafter", "whose", "beforehand", "herself", "of", "thereby", "why",
    "behind", "him", "off", "therefore", "will", "being", "himself", "often", "therein",
    "with", "below", "his", "on", "thereupon", "within", "beside", "how", "once",
    "these", "without", "besides", "however", "one", "they", "would", "between", "i",
    "only", "this", "yet", "beyond", "ie", "onto", "those", "you", "both", "if", "or",
    "though", "your", "but", "in", "other", "through", "yours", "by", "inc", "others",
    "throughout", "yourself", "can", "indeed", "otherwise", "thru", "yourselves",
];

/// The stop-word list reduced to stems.
///
/// Built once at startup from [`STOP_WORDS`] and immutable for the process
/// lifetime. Membership is checked against stems, matching how dictionary
/// words are compared during whitelist construction.
pub struct StopWordSet {
    stems: HashSet<String>,
}

impl StopWordSet {
    /// Stem the built-in list with the given stemmer
    pub fn new<S: Stemmer>(stemmer: &S) -> Self {
        Self {
            stems: STOP_WORDS.iter().map(|word| stemmer.stem(word)).collect(),
        }
    }

    /// Whether a stem belongs to a stop word
    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    /// Number of distinct stop-word stems
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// Whether the set is empty (never true for the built-in list)
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnowballStemmer;

    #[test]
    fn test_contains_stemmed_stop_words() {
        let stemmer = SnowballStemmer::english();
        let stop_words = StopWordSet::new(&stemmer);

        // "the" stems to itself; "becomes" stems to "becom"
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains(&stemmer.stem("becomes")));
    }

    #[test]
    fn test_excludes_content_words() {
        let stemmer = SnowballStemmer::english();
        let stop_words = StopWordSet::new(&stemmer);

        assert!(!stop_words.contains(&stemmer.stem("whale")));
        assert!(!stop_words.contains(&stemmer.stem("harpoon")));
    }

    #[test]
    fn test_not_empty() {
        let stemmer = SnowballStemmer::english();
        let stop_words = StopWordSet::new(&stemmer);
        assert!(!stop_words.is_empty());
        // Distinct stems can be fewer than raw words ("seem"/"seemed"/"seeming")
        assert!(stop_words.len() <= STOP_WORDS.len());
    }
}
