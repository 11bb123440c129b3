use crate::domain::{
    article::Article,
    enriched_article::{EnrichedArticle, TextFeatures},
};

use super::{
    capitalized_words, character_count, complexity, keyword_frequency, polarity, readability,
    word_count, KeywordVocabulary,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Vocabularies {
    pub title: KeywordVocabulary,
    pub kicker: KeywordVocabulary,
}

impl Vocabularies {
    pub fn build(table: &[Article], keyword_count: usize) -> Self {
        Self {
            title: KeywordVocabulary::from_texts(
                table.iter().map(|a| a.title.as_str()),
                keyword_count,
            ),
            kicker: KeywordVocabulary::from_texts(
                table.iter().map(|a| a.kicker.as_str()),
                keyword_count,
            ),
        }
    }
}

pub fn text_features(text: &str, vocabulary: &KeywordVocabulary) -> TextFeatures {
    TextFeatures {
        word_count: word_count(text),
        character_count: character_count(text),
        sentiment: polarity(text),
        keyword_frequency: keyword_frequency(text, vocabulary),
        readability: readability(text),
        complexity: complexity(text),
    }
}

pub fn enrich_article(article: Article, vocabularies: &Vocabularies) -> EnrichedArticle {
    EnrichedArticle {
        title: text_features(&article.title, &vocabularies.title),
        kicker: text_features(&article.kicker, &vocabularies.kicker),
        capital_words_kicker: capitalized_words(&article.kicker),
        article,
    }
}

pub fn enrich_table(table: Vec<Article>, keyword_count: usize) -> Vec<EnrichedArticle> {
    let vocabularies = Vocabularies::build(&table, keyword_count);
    log::debug!(
        "Title keywords: {:?} | Kicker keywords: {:?}",
        vocabularies.title.entries,
        vocabularies.kicker.entries
    );

    table
        .into_iter()
        .map(|article| enrich_article(article, &vocabularies))
        .collect()
}
