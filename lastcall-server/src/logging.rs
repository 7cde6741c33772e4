//! Tracing subscriber set-up shared by the binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr logger.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `info`, or at
/// `debug` (with HTTP request tracing) when `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("lastcall_server=debug,tower_http=debug,info")
        } else {
            EnvFilter::new("lastcall_server=info,warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
