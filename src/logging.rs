//! Diagnostic output on stderr via `tracing`.

use tracing::Level;

/// Install the global stderr subscriber.
///
/// Warnings and errors only, unless `verbose` is set.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}
