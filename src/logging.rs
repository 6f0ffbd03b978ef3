use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::stderr_buffer::BufferedStderr;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` with
/// `--verbose` and `warn` without. Output goes through the stderr buffer so
/// events raised while the TUI is active are printed after it exits.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grade_report={}", default_level)));

    let layer = fmt::layer()
        .with_target(verbose)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferedStderr::default);

    // Ignore a second install (tests or embedding callers may have set one).
    let _ = tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init();
}
