use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::article::{parse_publication_date, Article};

#[derive(Debug, Clone, PartialEq)]
pub struct TextFeatures {
    pub word_count: usize,
    pub character_count: usize,
    pub sentiment: f64,
    pub keyword_frequency: BTreeMap<String, usize>,
    pub readability: f64,
    pub complexity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedArticle {
    pub article: Article,
    pub title: TextFeatures,
    pub kicker: TextFeatures,
    pub capital_words_kicker: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub date: String,
    pub published_on: Option<NaiveDate>,
    pub title: String,
    pub kicker: String,
    pub image_url: String,
    pub link: String,
    pub word_count_title: i64,
    pub word_count_kicker: i64,
    pub character_count_title: i64,
    pub character_count_kicker: i64,
    pub capital_words_kicker: String,
    pub sentiment_title: f64,
    pub sentiment_kicker: f64,
    pub keyword_frequency_title: String,
    pub keyword_frequency_kicker: String,
    pub readability_score_title: f64,
    pub readability_score_kicker: f64,
    pub complexity_title: f64,
    pub complexity_kicker: f64,
}

impl EnrichedArticle {
    pub fn to_row(&self) -> Result<ArticleRow, serde_json::Error> {
        let article = &self.article;
        Ok(ArticleRow {
            date: article.date.clone(),
            published_on: parse_publication_date(&article.date),
            title: article.title.clone(),
            kicker: article.kicker.clone(),
            image_url: article.image_url.clone(),
            link: article.link.clone(),
            word_count_title: self.title.word_count as i64,
            word_count_kicker: self.kicker.word_count as i64,
            character_count_title: self.title.character_count as i64,
            character_count_kicker: self.kicker.character_count as i64,
            capital_words_kicker: serde_json::to_string(&self.capital_words_kicker)?,
            sentiment_title: self.title.sentiment,
            sentiment_kicker: self.kicker.sentiment,
            keyword_frequency_title: serde_json::to_string(&self.title.keyword_frequency)?,
            keyword_frequency_kicker: serde_json::to_string(&self.kicker.keyword_frequency)?,
            readability_score_title: self.title.readability,
            readability_score_kicker: self.kicker.readability,
            complexity_title: self.title.complexity,
            complexity_kicker: self.kicker.complexity,
        })
    }
}
