//! Opt-in tracing for the `palio` binary.
//!
//! The scanner emits `trace` events for every token and `debug` events for
//! every lexical error. Nothing is printed unless `PALIO_LOG` (or `RUST_LOG`)
//! is set:
//!
//! ```bash
//! PALIO_LOG=debug palio program.palio
//! PALIO_LOG="palio::lexer=trace" palio program.palio
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `PALIO_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("PALIO_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber, writing to stderr so token
/// listings on stdout stay clean.
pub fn init_tracing() {
    let enabled = std::env::var("PALIO_LOG").is_ok() || std::env::var("RUST_LOG").is_ok();
    if !enabled {
        return;
    }

    // A subscriber may already be installed (e.g. by an embedding test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
