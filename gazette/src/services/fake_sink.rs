use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;

use crate::{domain::enriched_article::ArticleRow, error::PipelineError, services::ArticleSink};

#[derive(Default)]
pub struct RecordingSink {
    pub calls: Mutex<Vec<(String, Vec<ArticleRow>)>>,
    fail: bool,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn peak_overlap(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleSink for RecordingSink {
    async fn replace_all(&self, target: &str, rows: &[ArticleRow]) -> Result<u64, PipelineError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail {
            return Err(PipelineError::Persistence(sqlx::Error::PoolTimedOut));
        }
        self.calls
            .lock()
            .unwrap()
            .push((target.to_string(), rows.to_vec()));
        Ok(rows.len() as u64)
    }
}
