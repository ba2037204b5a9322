//! Error types for lissajous-viz operations.

use std::io;
use thiserror::Error;

/// Exit status for fatal startup failures (the conventional `-1` as seen by the shell).
pub const STARTUP_FAILURE_EXIT_CODE: u8 = 255;

/// Exit status for terminal failures after the display was set up.
pub const RUNTIME_FAILURE_EXIT_CODE: u8 = 1;

/// Result type alias using [`LissajousError`].
pub type Result<T> = std::result::Result<T, LissajousError>;

/// Errors that can occur while setting up or driving the display.
#[derive(Debug, Error)]
pub enum LissajousError {
    /// The terminal cannot show the six-color palette.
    #[error("terminal does not support colors (reports {available} colors)")]
    NoColorSupport {
        /// Number of colors the terminal reports.
        available: u16,
    },

    /// The terminal reported a zero-area grid.
    #[error("display has no drawable area: {rows}x{cols}")]
    EmptyDisplay {
        /// Reported row count.
        rows: u16,
        /// Reported column count.
        cols: u16,
    },

    /// Terminal initialization, input or rendering error.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}

impl LissajousError {
    /// Returns true for failures detected before the display is touched.
    #[must_use]
    pub fn is_fatal_startup(&self) -> bool {
        matches!(self, Self::NoColorSupport { .. } | Self::EmptyDisplay { .. })
    }

    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal_startup() {
            STARTUP_FAILURE_EXIT_CODE
        } else {
            RUNTIME_FAILURE_EXIT_CODE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_display_includes_dimensions() {
        let err = LissajousError::EmptyDisplay { rows: 0, cols: 80 };
        let display = err.to_string();

        assert!(display.contains("0x80"), "Error should include dimensions: {}", display);
    }

    #[test]
    fn test_no_color_support_includes_count() {
        let err = LissajousError::NoColorSupport { available: 2 };
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_startup_errors_exit_nonzero() {
        let errors = [
            LissajousError::NoColorSupport { available: 0 },
            LissajousError::EmptyDisplay { rows: 0, cols: 0 },
        ];

        for err in errors {
            assert!(err.is_fatal_startup());
            assert_eq!(err.exit_code(), STARTUP_FAILURE_EXIT_CODE);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LissajousError = io_err.into();

        assert!(matches!(err, LissajousError::Terminal(_)), "Should convert to Terminal");
        assert!(!err.is_fatal_startup());
        assert_eq!(err.exit_code(), RUNTIME_FAILURE_EXIT_CODE);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_config_parse_error_includes_line_number() {
        let err = LissajousError::ConfigParse { line: 42, message: "invalid value".to_string() };
        let display = err.to_string();

        assert!(display.contains("42"), "Error should include line number: {}", display);
        assert!(display.contains("invalid value"), "Error should include message: {}", display);
    }

    #[test]
    fn test_config_invalid_includes_key() {
        let err = LissajousError::ConfigInvalid {
            key: "controls.phase_step".to_string(),
            message: "must be non-zero".to_string(),
        };

        assert!(err.to_string().contains("controls.phase_step"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LissajousError>();
    }
}
