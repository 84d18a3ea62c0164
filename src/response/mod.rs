//! Salesforce error response parsing.
//!
//! Salesforce answers failed calls in one of two shapes. The REST API returns a
//! JSON array of error items:
//!
//! ```json
//! [{"message": "Required fields are missing: [Name]",
//!   "errorCode": "REQUIRED_FIELD_MISSING",
//!   "fields": ["Name"]}]
//! ```
//!
//! while the OAuth token endpoint returns a single object:
//!
//! ```json
//! {"error": "invalid_grant", "error_description": "authentication failure"}
//! ```
//!
//! [`ErrorResponseParser`] accepts either and always produces at least one
//! [`ServiceFault`]; bodies it cannot read become an `Unknown` fault.

use crate::config::ParserConfig;
use crate::errors::{ErrorCategory, ServiceFault};
use crate::observability::{log_fault, log_unknown_code};
use serde::{Deserialize, Serialize};

/// One entry of a REST API error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestErrorItem {
    /// Human-readable message.
    pub message: String,
    /// Raw error code, e.g. `MALFORMED_QUERY`.
    pub error_code: String,
    /// Fields implicated in the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl RestErrorItem {
    /// Parse a REST error body: either an array of items or a single item.
    ///
    /// Returns `None` when the body has neither shape or the array is empty.
    pub fn parse_list(body: &str) -> Option<Vec<RestErrorItem>> {
        if let Ok(items) = serde_json::from_str::<Vec<RestErrorItem>>(body) {
            return (!items.is_empty()).then_some(items);
        }

        serde_json::from_str::<RestErrorItem>(body)
            .ok()
            .map(|item| vec![item])
    }

    /// Converts the item into a fault.
    pub fn into_fault(self) -> ServiceFault {
        match self.fields {
            Some(fields) => ServiceFault::with_fields(&self.error_code, self.message, fields),
            None => ServiceFault::from_code(&self.error_code, self.message),
        }
    }
}

/// OAuth token endpoint error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthErrorBody {
    /// Raw error code, e.g. `invalid_grant`.
    pub error: String,
    /// Human-readable description.
    #[serde(default)]
    pub error_description: Option<String>,
}

impl OAuthErrorBody {
    /// Parse an OAuth error body.
    pub fn parse(body: &str) -> Option<OAuthErrorBody> {
        serde_json::from_str(body).ok()
    }

    /// Converts the body into a fault.
    pub fn into_fault(self) -> ServiceFault {
        ServiceFault::from_code(&self.error, self.error_description.unwrap_or_default())
    }
}

/// Turns raw error responses into faults.
#[derive(Debug, Clone, Default)]
pub struct ErrorResponseParser {
    config: ParserConfig,
}

impl ErrorResponseParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an error response into its first fault.
    pub fn parse(&self, status: u16, body: &str) -> ServiceFault {
        let mut faults = self.parse_all(status, body);
        faults.swap_remove(0)
    }

    /// Parse an error response into every fault it reports.
    ///
    /// The returned vector is never empty.
    pub fn parse_all(&self, status: u16, body: &str) -> Vec<ServiceFault> {
        let faults = if let Some(items) = RestErrorItem::parse_list(body) {
            items
                .into_iter()
                .map(|item| {
                    let code = item.error_code.clone();
                    self.classify(status, &code, item.into_fault())
                })
                .collect()
        } else if let Some(oauth) = OAuthErrorBody::parse(body) {
            let code = oauth.error.clone();
            vec![self.classify(status, &code, oauth.into_fault())]
        } else {
            vec![self.fallback(status, body)]
        };

        for fault in &faults {
            log_fault(fault, Some(status));
        }

        faults
    }

    fn classify(&self, status: u16, raw_code: &str, fault: ServiceFault) -> ServiceFault {
        if self.config.log_unknown_codes && fault.category().is_unknown() {
            log_unknown_code(raw_code, Some(status));
        }
        fault
    }

    fn fallback(&self, status: u16, body: &str) -> ServiceFault {
        let body = body.trim();
        if body.is_empty() {
            return ServiceFault::new(ErrorCategory::Unknown, format!("HTTP {}", status));
        }

        let preview = match body.char_indices().nth(self.config.max_body_preview) {
            Some((end, _)) => &body[..end],
            None => body,
        };
        ServiceFault::new(ErrorCategory::Unknown, format!("HTTP {}: {}", status, preview))
    }
}

/// Parse an error response with the default configuration.
pub fn create_fault_from_response(status: u16, body: &str) -> ServiceFault {
    ErrorResponseParser::default().parse(status, body)
}
