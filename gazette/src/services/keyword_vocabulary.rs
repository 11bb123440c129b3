use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// The most frequent words of a corpus, highest count first. Equal counts
/// keep the order in which the words were first seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeywordVocabulary {
    pub entries: Vec<(String, usize)>,
}

impl KeywordVocabulary {
    pub fn from_corpus(corpus: &str, keyword_count: usize) -> Self {
        let cleaned = NON_WORD.replace_all(corpus, "").to_lowercase();

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = vec![];
        for word in cleaned.split_whitespace() {
            match positions.get(word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    positions.insert(word, counts.len());
                    counts.push((word, 1));
                }
            }
        }

        // stable sort keeps first-seen order within a count
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(keyword_count);

        Self {
            entries: counts
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        }
    }

    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>, keyword_count: usize) -> Self {
        Self::from_corpus(&texts.into_iter().join(" "), keyword_count)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeywordVocabulary, DEFAULT_KEYWORD_COUNT};

    #[test]
    fn ranks_by_count_then_first_seen() {
        let vocabulary = KeywordVocabulary::from_texts(
            ["big win today", "big jackpot today"],
            DEFAULT_KEYWORD_COUNT,
        );

        assert_eq!(
            vocabulary.entries,
            vec![
                ("big".to_string(), 2),
                ("today".to_string(), 2),
                ("win".to_string(), 1),
                ("jackpot".to_string(), 1),
            ]
        );
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        let vocabulary = KeywordVocabulary::from_corpus("Casino's BIG, big! win.", 10);

        assert_eq!(
            vocabulary.entries,
            vec![
                ("big".to_string(), 2),
                ("casinos".to_string(), 1),
                ("win".to_string(), 1),
            ]
        );
    }

    #[test]
    fn caps_at_keyword_count() {
        let corpus = (0..25).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ");

        let vocabulary = KeywordVocabulary::from_corpus(&corpus, 10);

        assert_eq!(vocabulary.len(), 10);
        assert_eq!(vocabulary.words().next(), Some("word0"));
    }

    #[test]
    fn small_corpus_yields_fewer_words() {
        let vocabulary = KeywordVocabulary::from_corpus("one two two", 10);
        assert_eq!(vocabulary.len(), 2);

        assert!(KeywordVocabulary::from_corpus("  ... ", 10).is_empty());
    }
}
