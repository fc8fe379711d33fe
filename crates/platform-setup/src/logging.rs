//! Logging initialization for platform-setup.
//!
//! Operator-facing output goes through cliclack; tracing carries diagnostics
//! to stderr and stays quiet (warnings only) unless asked otherwise.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set
fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over `--debug`.
pub fn init_logging(debug: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level(debug).to_string()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
