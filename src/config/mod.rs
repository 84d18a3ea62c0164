//! Configuration for error response parsing.

use crate::errors::{ConfigResult, ConfigurationError};

/// Default number of body characters kept when a response cannot be parsed.
pub const DEFAULT_MAX_BODY_PREVIEW: usize = 512;

/// Environment variable overriding [`ParserConfig::max_body_preview`].
pub const ENV_BODY_PREVIEW: &str = "SALESFORCE_ERROR_BODY_PREVIEW";

/// Environment variable overriding [`ParserConfig::log_unknown_codes`].
pub const ENV_LOG_UNKNOWN_CODES: &str = "SALESFORCE_LOG_UNKNOWN_CODES";

/// Settings for [`ErrorResponseParser`](crate::response::ErrorResponseParser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum characters of an unparseable body copied into the fault description.
    pub max_body_preview: usize,
    /// Emit a warning when a wire code resolves to `Unknown`.
    pub log_unknown_codes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_body_preview: DEFAULT_MAX_BODY_PREVIEW,
            log_unknown_codes: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SALESFORCE_ERROR_BODY_PREVIEW` (optional): preview length in characters
    /// - `SALESFORCE_LOG_UNKNOWN_CODES` (optional): `true`/`false`
    ///
    /// Values that do not parse are ignored.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ParserConfigBuilder::new();

        if let Some(preview) = lookup(ENV_BODY_PREVIEW) {
            if let Ok(preview) = preview.trim().parse::<usize>() {
                builder = builder.max_body_preview(preview);
            }
        }

        if let Some(flag) = lookup(ENV_LOG_UNKNOWN_CODES) {
            if let Some(enabled) = parse_flag(&flag) {
                builder = builder.log_unknown_codes(enabled);
            }
        }

        builder.build()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    max_body_preview: Option<usize>,
    log_unknown_codes: Option<bool>,
}

impl ParserConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preview length for unparseable bodies.
    pub fn max_body_preview(mut self, chars: usize) -> Self {
        self.max_body_preview = Some(chars);
        self
    }

    /// Enables or disables warnings for unrecognized codes.
    pub fn log_unknown_codes(mut self, enabled: bool) -> Self {
        self.log_unknown_codes = Some(enabled);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ConfigResult<ParserConfig> {
        let defaults = ParserConfig::default();
        let max_body_preview = self.max_body_preview.unwrap_or(defaults.max_body_preview);

        if max_body_preview == 0 {
            return Err(ConfigurationError::invalid(
                "max_body_preview must be greater than zero",
            ));
        }

        Ok(ParserConfig {
            max_body_preview,
            log_unknown_codes: self.log_unknown_codes.unwrap_or(defaults.log_unknown_codes),
        })
    }
}
