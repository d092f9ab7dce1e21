use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extractor::conf::WorkerConfig;
use extractor::transport::handle_raw;

/// Initialise the tracing / logging subsystem. Diagnostics go to stderr so
/// stdout stays a clean response channel.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = WorkerConfig::load()?;
    info!(
        "Starting extractor worker (max_content_bytes={}, summary_top_n={})",
        config.max_content_bytes, config.summary_top_n
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_raw(&line, &config);
        serde_json::to_writer(&mut out, &response)?;
        out.write_all(b"\n")?;
        out.flush()?;
    }

    info!("Input closed, worker shutting down");
    Ok(())
}
