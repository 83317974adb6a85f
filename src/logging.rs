//! Log output setup
//!
//! Logs go to stderr so they never mix with generated SQL. `RUST_LOG`
//! directives are layered on top of the level given on the command line.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Returns an error message if a global subscriber is already installed.
pub fn setup_logger(log_level: LevelFilter) -> Result<(), String> {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set the default subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_rejected() {
        // The first call may race with other tests; only the second must fail.
        let _ = setup_logger(LevelFilter::WARN);
        assert!(setup_logger(LevelFilter::WARN).is_err());
    }
}
