// file: src/logging/logger.rs
// version: 1.0.0
// guid: b8e1d4a7-3c96-4f02-9a5b-0d7f2e6c4a19

//! Logger initialization and configuration

use crate::error::WizardError;
use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level used for the given verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout is reserved for the wizard dialogue.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::new(level_for(verbose, quiet));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| WizardError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside a named operation span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), "warn");
        assert_eq!(level_for(true, false), "debug");
        assert_eq!(level_for(false, true), "error");
        // quiet wins over verbose
        assert_eq!(level_for(true, true), "error");
    }

    #[test]
    fn test_init_logger_twice_fails_gracefully() {
        // A global subscriber can only be set once per process, so the
        // second call must come back as an error rather than panicking.
        let _ = init_logger(false, false);

        let result = init_logger(true, false);

        assert!(matches!(result, Err(WizardError::Config(_))));
    }

    #[test]
    fn test_with_operation_span() {
        // Arrange
        let mut executed = false;

        // Act
        let result = with_operation_span("test_operation", || {
            executed = true;
            "test_result"
        });

        // Assert
        assert!(executed);
        assert_eq!(result, "test_result");
    }
}
