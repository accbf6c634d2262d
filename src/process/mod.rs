// src/process/mod.rs
pub mod campaign;
pub mod client;
pub mod concat;
pub mod date_parser;
pub mod economics;
pub mod load;
pub mod utils;
pub mod write;

use anyhow::{Context, Result};
use std::{fs, path::PathBuf, time::Instant};
use tracing::{info, instrument, warn};

use crate::config::EtlConfig;
use campaign::build_campaign_table;
use client::build_client_table;
use concat::concat_by_name;
use economics::build_economics_table;
use load::{discover_inputs, load_all};
use write::write_csv;

pub const CLIENT_FILE: &str = "client.csv";
pub const CAMPAIGN_FILE: &str = "campaign.csv";
pub const ECONOMICS_FILE: &str = "economics.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSummary {
    pub files_read: usize,
    pub files_skipped: usize,
    pub rows: usize,
    pub outputs: Vec<PathBuf>,
}

/// How a run ended. Only `Written` leaves output files behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// Nothing matched the input pattern.
    NoInputFiles,
    /// Inputs existed but none of them could be read.
    NothingLoaded { skipped: usize },
    Written(TransformSummary),
}

/// Load every compressed campaign file under `cfg.input_dir`, stack them, and split the
/// result into client / campaign / economics CSVs under `cfg.output_dir`.
///
/// Unreadable inputs are logged and skipped. Errors while building or writing a table are
/// returned; tables written before the failure stay on disk.
#[instrument(level = "info", skip(cfg), fields(input = %cfg.input_dir.display(), output = %cfg.output_dir.display()))]
pub fn clean_campaign_data(cfg: &EtlConfig) -> Result<TransformOutcome> {
    let start = Instant::now();

    fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating output directory {}", cfg.output_dir.display()))?;

    let inputs = discover_inputs(&cfg.input_dir, &cfg.file_pattern)?;
    if inputs.is_empty() {
        warn!(
            "no '{}' files found in {}",
            cfg.file_pattern,
            cfg.input_dir.display()
        );
        return Ok(TransformOutcome::NoInputFiles);
    }
    info!("{} input files", inputs.len());

    let loaded = load_all(&inputs);
    if loaded.batches.is_empty() {
        warn!(skipped = loaded.skipped, "no data loaded");
        return Ok(TransformOutcome::NothingLoaded {
            skipped: loaded.skipped,
        });
    }

    let full = concat_by_name(&loaded.batches)?;
    info!(rows = full.num_rows(), cols = full.num_columns(), "concatenated");

    let client_path = cfg.output_dir.join(CLIENT_FILE);
    write_csv(&build_client_table(&full)?, &client_path)?;

    let campaign_path = cfg.output_dir.join(CAMPAIGN_FILE);
    write_csv(
        &build_campaign_table(&full, cfg.contact_year)?,
        &campaign_path,
    )?;

    let economics_path = cfg.output_dir.join(ECONOMICS_FILE);
    write_csv(&build_economics_table(&full)?, &economics_path)?;

    info!("completed in {:?}", start.elapsed());
    Ok(TransformOutcome::Written(TransformSummary {
        files_read: loaded.batches.len(),
        files_skipped: loaded.skipped,
        rows: full.num_rows(),
        outputs: vec![client_path, campaign_path, economics_path],
    }))
}
