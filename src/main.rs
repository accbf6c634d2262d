use anyhow::Result;
use campaign_etl::{clean_campaign_data, EtlConfig, TransformOutcome};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) run the split ────────────────────────────────────────────
    let cfg = EtlConfig::default();
    match clean_campaign_data(&cfg) {
        Ok(TransformOutcome::Written(summary)) => {
            info!(
                files = summary.files_read,
                skipped = summary.files_skipped,
                rows = summary.rows,
                "wrote {} tables to {}",
                summary.outputs.len(),
                cfg.output_dir.display()
            );
        }
        Ok(TransformOutcome::NoInputFiles) => info!("nothing to do"),
        Ok(TransformOutcome::NothingLoaded { skipped }) => {
            info!(skipped, "no readable inputs; nothing written")
        }
        Err(e) => {
            error!("transform failed: {:#}", e);
            return Err(e);
        }
    }

    info!("all done");
    Ok(())
}
