//! Structured Salesforce fault.

use crate::errors::catalog::{ErrorCategory, FaultFamily};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that fail with a Salesforce fault.
pub type ServiceResult<T> = Result<T, ServiceFault>;

/// A classified error returned by the Salesforce API.
///
/// The value is immutable once built. It renders as its description, and
/// serializes with exactly the `category`, `description` and `fields` keys.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{description}")]
pub struct ServiceFault {
    category: ErrorCategory,
    description: String,
    #[serde(default)]
    fields: Vec<String>,
}

impl ServiceFault {
    /// Creates a fault for a category already known to the caller.
    pub fn new(category: ErrorCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a fault from a raw Salesforce error code.
    ///
    /// ```
    /// use integrations_salesforce::{ErrorCategory, ServiceFault};
    ///
    /// let fault = ServiceFault::from_code("NOT_FOUND", "Resource unavailable");
    /// assert_eq!(fault.category(), ErrorCategory::NotFound);
    /// assert!(fault.fields().is_empty());
    /// ```
    pub fn from_code(code: &str, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::resolve(code), description)
    }

    /// Creates a fault from a raw code along with the fields Salesforce blamed.
    ///
    /// Field order and duplicates are kept as given.
    pub fn with_fields<I, S>(code: &str, description: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Self::from_code(code, description)
        }
    }

    /// Returns the resolved category.
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the names of the fields implicated in the failure.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the family of the resolved category.
    pub fn family(&self) -> FaultFamily {
        self.category.family()
    }

    /// Consumes the fault, returning its category, description and fields.
    pub fn into_parts(self) -> (ErrorCategory, String, Vec<String>) {
        (self.category, self.description, self.fields)
    }
}
