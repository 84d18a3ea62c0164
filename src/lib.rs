//! Salesforce Fault Classification
//!
//! Typed errors for Salesforce REST and OAuth responses.
//!
//! Salesforce reports failures as a string code, a message and, for record
//! operations, the names of the offending fields. This crate resolves the code into
//! a closed [`ErrorCategory`] and carries the rest alongside it in a
//! [`ServiceFault`], so callers can branch on the category instead of matching
//! strings.
//!
//! # Example
//!
//! ```rust
//! use integrations_salesforce::{ErrorCategory, ErrorResponseParser, ServiceFault};
//!
//! let body = r#"[{"message":"Required fields are missing: [Name]",
//!                 "errorCode":"REQUIRED_FIELD_MISSING","fields":["Name"]}]"#;
//! let fault = ErrorResponseParser::default().parse(400, body);
//!
//! match fault.category() {
//!     ErrorCategory::RequiredFieldMissing => assert_eq!(fault.fields(), ["Name".to_string()]),
//!     other => panic!("unexpected category {other}"),
//! }
//!
//! let fault = ServiceFault::from_code("invalid_grant", "authentication failure");
//! assert!(fault.category().is_authentication());
//! ```
//!
//! # Architecture
//!
//! - `errors`: the category catalog, the fault value and configuration errors
//! - `response`: parsing of raw error bodies into faults
//! - `config`: parser settings
//! - `observability`: `tracing` events and subscriber setup

pub mod config;
pub mod errors;
pub mod observability;
pub mod response;

pub use config::{ParserConfig, ParserConfigBuilder};
pub use errors::{
    ConfigResult, ConfigurationError, ErrorCategory, FaultFamily, ServiceFault, ServiceResult,
};
pub use response::{create_fault_from_response, ErrorResponseParser, OAuthErrorBody, RestErrorItem};
