//! Observability for the Salesforce integration.
//!
//! Structured `tracing` events for classified faults, plus subscriber setup.

mod logging;

pub use logging::{log_fault, log_unknown_code, LogFormat, LogLevel, LoggingConfig};
