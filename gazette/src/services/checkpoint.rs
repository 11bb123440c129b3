use std::path::Path;

use crate::{domain::enriched_article::ArticleRow, error::PipelineError};

pub fn write_checkpoint(path: impl AsRef<Path>, rows: &[ArticleRow]) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn read_checkpoint(path: impl AsRef<Path>) -> Result<Vec<ArticleRow>, PipelineError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let rows = reader.deserialize().collect::<Result<Vec<ArticleRow>, csv::Error>>()?;
    Ok(rows)
}
