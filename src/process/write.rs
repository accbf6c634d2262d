use anyhow::{Context, Result};
use arrow::{csv::WriterBuilder, record_batch::RecordBatch};
use std::{fs::File, path::Path};
use tracing::info;

/// Write `batch` as a plain CSV with a header row and no index column. Nulls become empty fields.
pub fn write_csv<P: AsRef<Path>>(batch: &RecordBatch, path: P) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("creating file {}", path.display()))?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer
        .write(batch)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(file = %path.display(), rows = batch.num_rows(), "wrote");
    Ok(())
}
