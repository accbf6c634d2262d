pub mod config;
pub mod process;

pub use config::EtlConfig;
pub use process::{clean_campaign_data, TransformOutcome, TransformSummary};
