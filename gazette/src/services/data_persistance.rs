use async_trait::async_trait;

use crate::{domain::enriched_article::ArticleRow, error::PipelineError};

/// Destination for a run's enriched table.
///
/// `replace_all` deletes every row in `target` and then appends `rows`; it
/// is not a merge, and readers may see an empty target in between.
#[async_trait]
pub trait ArticleSink: Send + Sync {
    async fn replace_all(&self, target: &str, rows: &[ArticleRow]) -> Result<u64, PipelineError>;
}
