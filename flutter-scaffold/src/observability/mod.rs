//! Observability (logging)
//!
//! Library code logs through `tracing` macros; binaries call [`init`] once
//! to install a subscriber writing to stderr, leaving stdout for user
//! facing output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity level
///
/// `0` keeps only warnings; each additional level widens the filter.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,flutter_scaffold=info",
        2 => "info,flutter_scaffold=debug",
        _ => "debug,flutter_scaffold=trace",
    }
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `verbosity`.
///
/// # Example
///
/// ```rust,no_run
/// use flutter_scaffold::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(1)?;
/// tracing::info!("generator started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
