use tokio::sync::Mutex;

use crate::{configuration::Settings, error::PipelineError};

use super::{read_checkpoint, run_pipeline, ArticleSink, Launcher, RunReport};

/// Owns everything a triggered run needs. Runs and replays both rewrite the
/// whole target table, so they take turns on `run_lock`.
pub struct Harvester<L, S> {
    launcher: L,
    sink: S,
    settings: Settings,
    run_lock: Mutex<()>,
}

impl<L: Launcher, S: ArticleSink> Harvester<L, S> {
    pub fn new(launcher: L, sink: S, settings: Settings) -> Self {
        Self {
            launcher,
            sink,
            settings,
            run_lock: Mutex::new(()),
        }
    }

    pub async fn harvest(&self) -> Result<RunReport, PipelineError> {
        let _running = self.run_lock.lock().await;

        let session = self.launcher.launch(&self.settings.crawler).await?;
        let result = run_pipeline(
            &session,
            &self.sink,
            &self.settings.crawler,
            &self.settings.pipeline,
        )
        .await;
        self.launcher.close(session).await;

        result
    }

    pub async fn replay(&self) -> Result<Option<u64>, PipelineError> {
        let Some(path) = self.settings.pipeline.checkpoint_path.as_ref() else {
            return Ok(None);
        };
        let _running = self.run_lock.lock().await;

        let rows = read_checkpoint(path)?;
        let stored = self
            .sink
            .replace_all(&self.settings.pipeline.target_table, &rows)
            .await?;
        log::info!("Replayed {} rows from {}", stored, path);
        Ok(Some(stored))
    }
}
