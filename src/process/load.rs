use anyhow::{anyhow, bail, Context, Result};
use arrow::{
    compute::concat_batches,
    csv::ReaderBuilder,
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use glob::glob;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, error, info, instrument};
use zip::ZipArchive;

const BATCH_SIZE: usize = 8192;

/// Every regular file in `dir` matching `pattern`, sorted. A missing `dir` yields nothing.
pub fn discover_inputs<P: AsRef<Path>>(dir: P, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = dir.as_ref().join(pattern);
    let full = full
        .to_str()
        .ok_or_else(|| anyhow!("non UTF-8 input path {:?}", full))?;

    let mut paths: Vec<PathBuf> = glob(full)
        .with_context(|| format!("bad glob pattern {}", full))?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Read the single CSV held in `zip_path` into one all-string `RecordBatch`.
///
/// Nothing is extracted to disk. Empty fields come back as nulls.
#[instrument(level = "debug", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn load_campaign_zip<P: AsRef<Path>>(zip_path: P) -> Result<RecordBatch> {
    let zip_path = zip_path.as_ref();
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {:?}", zip_path))?;

    // scan once to find the lone data file; directories and macOS metadata don't count
    let mut data_entries = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).with_context(|| {
            format!("Failed to access ZIP entry #{} in {:?}", i, zip_path)
        })?;
        if entry.is_file() && !entry.name().starts_with("__MACOSX/") {
            data_entries.push(i);
        }
    }
    let idx = match data_entries.as_slice() {
        [idx] => *idx,
        [] => bail!("no data file inside {:?}", zip_path),
        many => bail!(
            "expected one data file inside {:?}, found {}",
            zip_path,
            many.len()
        ),
    };

    let mut entry = archive
        .by_index(idx)
        .with_context(|| format!("Failed to access ZIP entry #{} in {:?}", idx, zip_path))?;
    let name = entry.name().to_string();
    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {} into memory", name))?;
    drop(entry);

    let batch = parse_csv(&buf).with_context(|| format!("CSV parse error in {}", name))?;
    debug!(entry = %name, rows = batch.num_rows(), cols = batch.num_columns(), "parsed");
    Ok(batch)
}

/// Header via the `csv` crate, body via Arrow's reader with every column as nullable Utf8.
fn parse_csv(buf: &[u8]) -> Result<RecordBatch> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(buf));
    let headers: Vec<String> = rdr
        .headers()
        .context("reading header row")?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        bail!("no columns to parse");
    }

    let fields: Vec<Field> = headers
        .iter()
        .map(|n| Field::new(n, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_truncated_rows(true)
        .with_batch_size(BATCH_SIZE)
        .with_quote(b'"')
        .with_delimiter(b',')
        .build(Cursor::new(buf))
        .context("creating CSV reader")?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("reading CSV batches")?;
    concat_batches(&schema, &batches).context("joining CSV batches")
}

/// Batches that loaded, in input order, plus how many files were skipped.
pub struct Loaded {
    pub batches: Vec<RecordBatch>,
    pub skipped: usize,
}

/// Load every path, logging and skipping the ones that fail.
pub fn load_all(paths: &[PathBuf]) -> Loaded {
    let mut batches = Vec::with_capacity(paths.len());
    let mut skipped = 0;
    for path in paths {
        match load_campaign_zip(path) {
            Ok(batch) => {
                info!(file = %path.display(), rows = batch.num_rows(), "loaded");
                batches.push(batch);
            }
            Err(e) => {
                error!(file = %path.display(), "failed to read, skipping: {:#}", e);
                skipped += 1;
            }
        }
    }
    Loaded { batches, skipped }
}
