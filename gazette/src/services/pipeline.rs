use uuid::Uuid;

use crate::{
    configuration::{CrawlerSettings, PipelineSettings},
    domain::enriched_article::ArticleRow,
    error::PipelineError,
};

use super::{
    aggregate, crawl_category, enrich_table, enumerate_categories, write_checkpoint, ArticleSink,
    Browser,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub run_id: Uuid,
    pub categories: usize,
    pub articles: usize,
    pub stored: u64,
}

pub async fn run_pipeline<B: Browser, S: ArticleSink>(
    browser: &B,
    sink: &S,
    crawler: &CrawlerSettings,
    pipeline: &PipelineSettings,
) -> Result<RunReport, PipelineError> {
    let run_id = Uuid::new_v4();
    log::info!("[{}] Starting run from {}", run_id, crawler.entry_url);

    let categories = enumerate_categories(browser, crawler).await?;

    let mut tables = Vec::with_capacity(categories.len());
    for url in categories.iter() {
        let crawl = crawl_category(browser, url, crawler).await;
        tables.push(crawl.articles);
    }

    let table = aggregate(tables);
    log::info!(
        "[{}] Harvested {} articles from {} categories",
        run_id,
        table.len(),
        categories.len()
    );

    let articles = table.len();
    let enriched = enrich_table(table, pipeline.keyword_count);
    let rows = enriched
        .iter()
        .map(|article| article.to_row())
        .collect::<Result<Vec<ArticleRow>, serde_json::Error>>()?;

    if let Some(path) = pipeline.checkpoint_path.as_ref() {
        match write_checkpoint(path, &rows) {
            Ok(()) => log::info!("[{}] Wrote checkpoint to {}", run_id, path),
            Err(e) => log::error!("[{}] Failed to write checkpoint {}: {}", run_id, path, e),
        }
    }

    let stored = sink.replace_all(&pipeline.target_table, &rows).await?;
    log::info!("[{}] Stored {} rows in {}", run_id, stored, pipeline.target_table);

    Ok(RunReport {
        run_id,
        categories: categories.len(),
        articles,
        stored,
    })
}
