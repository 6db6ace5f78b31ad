//! Structured logging facade.
//!
//! This module initializes the `tracing` subscriber the toolkit logs
//! through. The default configuration writes JSON lines to stdout with
//! lowercase level keys, which is what log collectors in front of these
//! services expect. `RUST_LOG` always wins over the programmed level.
//!
//! Errors are attached to events as display-formatted fields
//! (`error = %err`); the facade performs no inspection of the chain. The
//! request-tracking identifier travels as a span field, see
//! [`crate::tracking::TrackingContext::span`].

use thiserror::Error as ThisError;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level configuration for the logging facade.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warning level
    Warn,
    /// Error level - least verbose
    Error,
    /// Disable logging entirely
    Off,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl From<u8> for LogLevel {
    /// Convert verbosity count to log level.
    /// 0 = Info, 1 = Debug, 2+ = Trace
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// The global subscriber could not be installed.
#[derive(Debug, ThisError)]
#[error("couldn't initialize logging: {0}")]
pub struct InitError(#[from] tracing_subscriber::util::TryInitError);

/// Configuration for the logging facade.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The log level to use
    pub level: LogLevel,
    /// Whether to emit JSON lines instead of human-readable output
    pub json: bool,
    /// Whether to include timestamps
    pub with_timestamps: bool,
    /// Whether to include the target (module path)
    pub with_target: bool,
    /// Whether to include file information
    pub with_file: bool,
    /// Whether to include line numbers
    pub with_line_number: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            json: true,
            with_timestamps: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set whether to emit JSON lines.
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Set whether to include timestamps.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.with_timestamps = enabled;
        self
    }

    /// Set whether to include the target (module path).
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Set whether to include file information.
    pub fn with_file(mut self, enabled: bool) -> Self {
        self.with_file = enabled;
        self
    }

    /// Set whether to include line numbers.
    pub fn with_line_number(mut self, enabled: bool) -> Self {
        self.with_line_number = enabled;
        self
    }

    /// Create a configuration from verbosity level (0 = info, 1 = debug, 2+ = trace).
    pub fn from_verbosity(verbosity: u8) -> Self {
        Self::default().with_level(LogLevel::from(verbosity))
    }

    fn env_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.level.directive())
        }
    }
}

/// Initialize the logging facade with the given configuration.
///
/// This should be called once at the start of the application. A second
/// call fails with [`InitError`] because the global subscriber is already
/// installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), InitError> {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stdout)
        .with_target(config.with_target)
        .with_file(config.with_file)
        .with_line_number(config.with_line_number);

    match (config.json, config.with_timestamps) {
        (true, true) => builder.json().finish().try_init()?,
        (true, false) => builder.json().without_time().finish().try_init()?,
        (false, true) => builder.finish().try_init()?,
        (false, false) => builder.without_time().finish().try_init()?,
    }
    Ok(())
}

/// Initialize logging with default configuration: info level (unless
/// `RUST_LOG` is set), JSON lines with timestamps on stdout.
pub fn init_default_logging() -> Result<(), InitError> {
    init_logging(LoggingConfig::default())
}

/// Initialize a quiet logger for tests: error level only, and repeat
/// initialization across tests is tolerated.
pub fn init_test_logging() {
    let _ = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::new("error"))
        .with_writer(std::io::stdout)
        .json()
        .try_init();
}
