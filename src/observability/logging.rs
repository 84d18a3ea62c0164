//! Logging configuration and fault events.
//!
//! Events are emitted through the `tracing` crate. Applications that do not install
//! their own subscriber can call [`LoggingConfig::init`] once at startup.

use crate::errors::ServiceFault;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
    Registry,
};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The minimum log level to capture
    pub level: LogLevel,
    /// The output format for log messages
    pub format: LogFormat,
    /// Whether to include the module target in log output
    pub include_target: bool,
    /// Whether to include file and line number in log output
    pub include_file_line: bool,
}

/// Log level enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace-level logging (most verbose)
    Trace,
    /// Debug-level logging
    Debug,
    /// Info-level logging
    Info,
    /// Warning-level logging
    Warn,
    /// Error-level logging (least verbose)
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from_level(level.into())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (for development)
    Pretty,
    /// JSON format (for structured logging in production)
    Json,
    /// Compact format (for space-constrained environments)
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_target: true,
            include_file_line: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a new logging configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_salesforce::observability::{LoggingConfig, LogLevel};
    ///
    /// let config = LoggingConfig::new().with_level(LogLevel::Debug);
    /// assert_eq!(config.level, LogLevel::Debug);
    /// ```
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the log format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether to include the module target.
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Sets whether to include file and line number.
    pub fn with_file_line(mut self, include: bool) -> Self {
        self.include_file_line = include;
        self
    }

    /// Initialize logging with this configuration.
    ///
    /// Target-specific `RUST_LOG` directives are kept; the configured level sets the
    /// default and replaces any bare level given in `RUST_LOG`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber has already been installed.
    pub fn init(self) -> Result<(), TryInitError> {
        let filter = EnvFilter::from_default_env().add_directive(LevelFilter::from(self.level).into());
        let target = self.include_target;
        let file_line = self.include_file_line;

        let layer: Box<dyn Layer<Registry> + Send + Sync> = match self.format {
            LogFormat::Pretty => fmt::layer()
                .with_ansi(true)
                .with_target(target)
                .with_file(file_line)
                .with_line_number(file_line)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .with_target(target)
                .with_file(file_line)
                .with_line_number(file_line)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(target)
                .with_file(file_line)
                .with_line_number(file_line)
                .boxed(),
        };

        tracing_subscriber::registry().with(layer).with(filter).try_init()
    }
}

/// Log a classified fault.
///
/// # Examples
///
/// ```
/// use integrations_salesforce::observability::log_fault;
/// use integrations_salesforce::ServiceFault;
///
/// let fault = ServiceFault::from_code("INVALID_FIELD", "No such column 'Foo__c'");
/// log_fault(&fault, Some(400));
/// ```
pub fn log_fault(fault: &ServiceFault, status: Option<u16>) {
    tracing::debug!(
        status = status,
        category = %fault.category(),
        family = %fault.family(),
        field_count = fault.fields().len(),
        description = fault.description(),
        "Salesforce fault classified"
    );
}

/// Log a wire code that matched no known category.
pub fn log_unknown_code(raw_code: &str, status: Option<u16>) {
    tracing::warn!(
        raw_code = raw_code,
        status = status,
        "Unrecognized Salesforce error code"
    );
}
