//! Diagnostic tracing for the command line.
//!
//! Answers and explanations go to stdout; tracing output goes to stderr and
//! is controlled by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=mathgenius=trace mathgenius "2+3*4"
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry().with(filter)
                                  .with(fmt::layer().with_writer(std::io::stderr).compact())
                                  .init();
}
