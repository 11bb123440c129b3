use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    domain::enriched_article::ArticleRow, error::PipelineError, services::ArticleSink,
};

// 19 binds per row keeps each statement well under the 65535 parameter limit
const INSERT_CHUNK_SIZE: usize = 1_000;

static TABLE_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$").unwrap());

pub fn validate_target(target: &str) -> Result<&str, PipelineError> {
    match TABLE_IDENTIFIER.is_match(target) {
        true => Ok(target),
        false => Err(PipelineError::InvalidTarget(target.to_string())),
    }
}

pub async fn delete_all_articles(pool: &PgPool, target: &str) -> Result<u64, sqlx::Error> {
    let query = format!("delete from {} where true", target);
    let result = sqlx::query(&query).execute(pool).await?;
    Ok(result.rows_affected())
}

pub async fn insert_articles(
    pool: &PgPool,
    target: &str,
    rows: &[ArticleRow],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            r"
            insert into {}
                (date, published_on, title, kicker, image_url, link,
                word_count_title, word_count_kicker,
                character_count_title, character_count_kicker,
                capital_words_kicker, sentiment_title, sentiment_kicker,
                keyword_frequency_title, keyword_frequency_kicker,
                readability_score_title, readability_score_kicker,
                complexity_title, complexity_kicker)
            ",
            target
        ));

        builder.push_values(chunk, |mut b, row| {
            b.push_bind(row.date.as_str())
                .push_bind(row.published_on)
                .push_bind(row.title.as_str())
                .push_bind(row.kicker.as_str())
                .push_bind(row.image_url.as_str())
                .push_bind(row.link.as_str())
                .push_bind(row.word_count_title)
                .push_bind(row.word_count_kicker)
                .push_bind(row.character_count_title)
                .push_bind(row.character_count_kicker)
                .push_bind(row.capital_words_kicker.as_str())
                .push_bind(row.sentiment_title)
                .push_bind(row.sentiment_kicker)
                .push_bind(row.keyword_frequency_title.as_str())
                .push_bind(row.keyword_frequency_kicker.as_str())
                .push_bind(row.readability_score_title)
                .push_bind(row.readability_score_kicker)
                .push_bind(row.complexity_title)
                .push_bind(row.complexity_kicker);
        });

        inserted += builder.build().execute(pool).await?.rows_affected();
    }

    Ok(inserted)
}

pub struct PgArticleSink {
    pool: PgPool,
}

impl PgArticleSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleSink for PgArticleSink {
    async fn replace_all(&self, target: &str, rows: &[ArticleRow]) -> Result<u64, PipelineError> {
        let target = validate_target(target)?;

        log::info!("Deleting existing rows from {}", target);
        let deleted = delete_all_articles(&self.pool, target).await?;
        log::info!("Deleted {} rows, loading {} new rows", deleted, rows.len());

        let inserted = insert_articles(&self.pool, target, rows).await?;
        log::info!("Load completed, {} now has {} rows", target, inserted);

        Ok(inserted)
    }
}
