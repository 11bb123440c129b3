use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::KeywordVocabulary;

static VOWEL_CLUSTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// A token is title-cased when every cased run starts with an uppercase
/// letter followed only by lowercase ones ("Macau", "U.S."), and it has at
/// least one cased letter.
pub fn is_title_case(token: &str) -> bool {
    let mut previous_cased = false;
    let mut any_cased = false;

    for c in token.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }

    any_cased
}

pub fn capitalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| is_title_case(word))
        .map(String::from)
        .collect()
}

/// Flesch reading ease with vowel clusters standing in for syllables.
///
/// Returns 0 for text without words or without `.`, `!` or `?`.
pub fn readability(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    let num_words = words.len();
    let num_sentences = text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();

    if num_words == 0 || num_sentences == 0 {
        return 0.0;
    }

    let num_syllables: usize = words
        .iter()
        .map(|word| VOWEL_CLUSTER.find_iter(&word.to_lowercase()).count())
        .sum();

    let num_words = num_words as f64;
    206.835
        - 1.015 * (num_words / num_sentences as f64)
        - 84.6 * (num_syllables as f64 / num_words)
}

pub fn complexity(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let total: usize = words.iter().map(|word| word.chars().count()).sum();
    total as f64 / words.len() as f64
}

pub fn keyword_frequency(text: &str, vocabulary: &KeywordVocabulary) -> BTreeMap<String, usize> {
    let tokens: Vec<String> = text.split_whitespace().map(|t| t.to_lowercase()).collect();

    vocabulary
        .words()
        .map(|keyword| {
            let count = tokens.iter().filter(|t| t.as_str() == keyword).count();
            (keyword.to_string(), count)
        })
        .collect()
}
