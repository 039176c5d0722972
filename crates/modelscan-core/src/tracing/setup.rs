//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the modelscan logging system.
///
/// Reads `MODELSCAN_LOG` for per-module log levels, e.g.
/// `MODELSCAN_LOG=modelscan_analysis::models=debug,modelscan_analysis::parsers=warn`.
///
/// Falls back to `modelscan=info` if the variable is unset or invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("modelscan=info"));

        // A host may already own the global subscriber.
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        if let Err(e) = installed {
            tracing::debug!(error = %e, "keeping the existing global subscriber");
        }
    });
}
