// src/logging.rs
// =============================================================================
// Sets up `tracing` output.
//
// Log lines go to stderr so that `--json` output on stdout stays clean.
// The level defaults to "info" and can be changed with RUST_LOG, e.g.
//   RUST_LOG=debug image-crawler https://example.com
// =============================================================================

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn setup_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}
