//! Catalog of Salesforce error categories.
//!
//! Salesforce reports failures with string codes such as `INVALID_GRANT` or
//! `REQUIRED_FIELD_MISSING`. Their casing and separators differ between the OAuth
//! endpoints and the REST API, so codes are resolved against the catalog by member
//! name, ignoring case and underscores.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Known Salesforce error categories.
///
/// Codes that match no member resolve to [`ErrorCategory::Unknown`], so new codes
/// introduced by Salesforce degrade gracefully instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCategory {
    /// Unrecognized error code.
    #[default]
    Unknown,
    /// The OAuth client is invalid.
    InvalidClient,
    /// The requested grant type is not supported.
    UnsupportedGrantType,
    /// The grant (authorization code, refresh token, credentials) is invalid.
    InvalidGrant,
    /// Authentication failed.
    AuthenticationFailure,
    /// The password is invalid.
    InvalidPassword,
    /// The client identifier is invalid.
    ClientIdentifierInvalid,
    /// The resource or record was not found.
    NotFound,
    /// The query string is invalid, e.g. longer than 20,000 characters.
    MalformedQuery,
    /// A custom field validation rule rejected the record.
    FieldCustomValidationException,
    /// A field used on insert or update is invalid.
    InvalidFieldForInsertUpdate,
    /// The client id used to authenticate is invalid.
    InvalidClientId,
    /// A field is invalid.
    InvalidField,
    /// A required field is missing.
    RequiredFieldMissing,
    /// A string value is too long.
    StringTooLong,
    /// The referenced record has been deleted.
    EntityIsDeleted,
    /// An ID must be 15 characters, or 18 characters with a valid case-insensitive
    /// extension.
    MalformedId,
    /// An invalid operator was used in a query filter clause for that field.
    InvalidQueryFilterOperator,
}

/// Coarse grouping of categories for caller-side branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultFamily {
    /// OAuth and login failures.
    Authentication,
    /// SOQL query failures.
    Query,
    /// Field-level validation failures on insert or update.
    Validation,
    /// Failures addressing a specific record.
    Record,
    /// Codes the catalog does not know.
    Unclassified,
}

impl fmt::Display for FaultFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultFamily::Authentication => "authentication",
            FaultFamily::Query => "query",
            FaultFamily::Validation => "validation",
            FaultFamily::Record => "record",
            FaultFamily::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

impl ErrorCategory {
    /// Every member of the catalog, `Unknown` first.
    pub const ALL: [ErrorCategory; 18] = [
        ErrorCategory::Unknown,
        ErrorCategory::InvalidClient,
        ErrorCategory::UnsupportedGrantType,
        ErrorCategory::InvalidGrant,
        ErrorCategory::AuthenticationFailure,
        ErrorCategory::InvalidPassword,
        ErrorCategory::ClientIdentifierInvalid,
        ErrorCategory::NotFound,
        ErrorCategory::MalformedQuery,
        ErrorCategory::FieldCustomValidationException,
        ErrorCategory::InvalidFieldForInsertUpdate,
        ErrorCategory::InvalidClientId,
        ErrorCategory::InvalidField,
        ErrorCategory::RequiredFieldMissing,
        ErrorCategory::StringTooLong,
        ErrorCategory::EntityIsDeleted,
        ErrorCategory::MalformedId,
        ErrorCategory::InvalidQueryFilterOperator,
    ];

    /// Resolves a raw Salesforce error code.
    ///
    /// Underscores are stripped and the remainder is compared with each member name
    /// after uppercasing both sides, so non-ASCII letters such as the dotless `ı`
    /// fold as well. Anything that does not match yields `Unknown`.
    ///
    /// ```
    /// use integrations_salesforce::ErrorCategory;
    ///
    /// assert_eq!(ErrorCategory::resolve("INVALID_GRANT"), ErrorCategory::InvalidGrant);
    /// assert_eq!(ErrorCategory::resolve("malformedquery"), ErrorCategory::MalformedQuery);
    /// assert_eq!(ErrorCategory::resolve("TOTALLY_BOGUS"), ErrorCategory::Unknown);
    /// ```
    pub fn resolve(raw: &str) -> Self {
        let normalized: String = raw.chars().filter(|c| *c != '_').collect();

        Self::ALL
            .iter()
            .copied()
            .find(|category| eq_ignore_case(category.as_str(), &normalized))
            .unwrap_or(ErrorCategory::Unknown)
    }

    /// Returns the canonical identifier, which is the member name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Unknown => "Unknown",
            ErrorCategory::InvalidClient => "InvalidClient",
            ErrorCategory::UnsupportedGrantType => "UnsupportedGrantType",
            ErrorCategory::InvalidGrant => "InvalidGrant",
            ErrorCategory::AuthenticationFailure => "AuthenticationFailure",
            ErrorCategory::InvalidPassword => "InvalidPassword",
            ErrorCategory::ClientIdentifierInvalid => "ClientIdentifierInvalid",
            ErrorCategory::NotFound => "NotFound",
            ErrorCategory::MalformedQuery => "MalformedQuery",
            ErrorCategory::FieldCustomValidationException => "FieldCustomValidationException",
            ErrorCategory::InvalidFieldForInsertUpdate => "InvalidFieldForInsertUpdate",
            ErrorCategory::InvalidClientId => "InvalidClientId",
            ErrorCategory::InvalidField => "InvalidField",
            ErrorCategory::RequiredFieldMissing => "RequiredFieldMissing",
            ErrorCategory::StringTooLong => "StringTooLong",
            ErrorCategory::EntityIsDeleted => "EntityIsDeleted",
            ErrorCategory::MalformedId => "MalformedId",
            ErrorCategory::InvalidQueryFilterOperator => "InvalidQueryFilterOperator",
        }
    }

    /// Returns the code as Salesforce puts it on the wire, e.g. `INVALID_GRANT`.
    ///
    /// `Unknown` has no wire code.
    pub fn wire_code(&self) -> Option<&'static str> {
        let code = match self {
            ErrorCategory::Unknown => return None,
            ErrorCategory::InvalidClient => "INVALID_CLIENT",
            ErrorCategory::UnsupportedGrantType => "UNSUPPORTED_GRANT_TYPE",
            ErrorCategory::InvalidGrant => "INVALID_GRANT",
            ErrorCategory::AuthenticationFailure => "AUTHENTICATION_FAILURE",
            ErrorCategory::InvalidPassword => "INVALID_PASSWORD",
            ErrorCategory::ClientIdentifierInvalid => "CLIENT_IDENTIFIER_INVALID",
            ErrorCategory::NotFound => "NOT_FOUND",
            ErrorCategory::MalformedQuery => "MALFORMED_QUERY",
            ErrorCategory::FieldCustomValidationException => "FIELD_CUSTOM_VALIDATION_EXCEPTION",
            ErrorCategory::InvalidFieldForInsertUpdate => "INVALID_FIELD_FOR_INSERT_UPDATE",
            ErrorCategory::InvalidClientId => "INVALID_CLIENT_ID",
            ErrorCategory::InvalidField => "INVALID_FIELD",
            ErrorCategory::RequiredFieldMissing => "REQUIRED_FIELD_MISSING",
            ErrorCategory::StringTooLong => "STRING_TOO_LONG",
            ErrorCategory::EntityIsDeleted => "ENTITY_IS_DELETED",
            ErrorCategory::MalformedId => "MALFORMED_ID",
            ErrorCategory::InvalidQueryFilterOperator => "INVALID_QUERY_FILTER_OPERATOR",
        };
        Some(code)
    }

    /// Returns the family this category belongs to.
    pub fn family(&self) -> FaultFamily {
        match self {
            ErrorCategory::InvalidClient
            | ErrorCategory::UnsupportedGrantType
            | ErrorCategory::InvalidGrant
            | ErrorCategory::AuthenticationFailure
            | ErrorCategory::InvalidPassword
            | ErrorCategory::ClientIdentifierInvalid
            | ErrorCategory::InvalidClientId => FaultFamily::Authentication,
            ErrorCategory::MalformedQuery | ErrorCategory::InvalidQueryFilterOperator => {
                FaultFamily::Query
            }
            ErrorCategory::FieldCustomValidationException
            | ErrorCategory::InvalidFieldForInsertUpdate
            | ErrorCategory::InvalidField
            | ErrorCategory::RequiredFieldMissing
            | ErrorCategory::StringTooLong => FaultFamily::Validation,
            ErrorCategory::NotFound | ErrorCategory::EntityIsDeleted | ErrorCategory::MalformedId => {
                FaultFamily::Record
            }
            ErrorCategory::Unknown => FaultFamily::Unclassified,
        }
    }

    /// Check if the category is an OAuth or login failure.
    pub fn is_authentication(&self) -> bool {
        self.family() == FaultFamily::Authentication
    }

    /// Check if the category is a field validation failure.
    pub fn is_validation(&self) -> bool {
        self.family() == FaultFamily::Validation
    }

    /// Check if the code was not recognized.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ErrorCategory::Unknown)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::resolve(s))
    }
}

impl From<&str> for ErrorCategory {
    fn from(raw: &str) -> Self {
        Self::resolve(raw)
    }
}

impl Serialize for ErrorCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::resolve(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("invalid_grant" ; "lower snake")]
    #[test_case("INVALID_GRANT" ; "upper snake")]
    #[test_case("Invalid_Grant" ; "mixed snake")]
    #[test_case("INVALIDGRANT" ; "upper no separator")]
    #[test_case("invalidGrant" ; "camel")]
    #[test_case("INVALID__GRANT_" ; "stray underscores")]
    fn test_resolve_ignores_case_and_underscores(raw: &str) {
        assert_eq!(ErrorCategory::resolve(raw), ErrorCategory::InvalidGrant);
    }

    #[test]
    fn test_resolve_every_wire_code() {
        for category in ErrorCategory::ALL.iter().filter(|c| !c.is_unknown()) {
            let wire = category.wire_code().unwrap();
            assert_eq!(ErrorCategory::resolve(wire), *category, "{wire}");
            assert_eq!(ErrorCategory::resolve(&wire.to_lowercase()), *category);
            assert_eq!(ErrorCategory::resolve(&wire.replace('_', "")), *category);
            assert_eq!(ErrorCategory::resolve(category.as_str()), *category);
        }
    }

    #[test_case("" ; "empty")]
    #[test_case("totally_bogus_code" ; "bogus")]
    #[test_case("INVALID_SESSION_ID" ; "unlisted salesforce code")]
    #[test_case("INVALID-GRANT" ; "hyphen is not a separator")]
    #[test_case(" INVALID_GRANT" ; "leading whitespace")]
    #[test_case("___" ; "only underscores")]
    fn test_resolve_unknown(raw: &str) {
        assert_eq!(ErrorCategory::resolve(raw), ErrorCategory::Unknown);
    }

    #[test_case("ınvalıd_grant", ErrorCategory::InvalidGrant ; "dotless i")]
    #[test_case("ſtring_too_long", ErrorCategory::StringTooLong ; "long s")]
    fn test_resolve_folds_unicode_case(raw: &str, expected: ErrorCategory) {
        assert_eq!(ErrorCategory::resolve(raw), expected);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = ErrorCategory::resolve("STRING_TOO_LONG");
        let second = ErrorCategory::resolve("STRING_TOO_LONG");
        assert_eq!(first, second);
        assert_eq!(first, ErrorCategory::StringTooLong);
    }

    #[test]
    fn test_canonical_identifiers_are_unique() {
        for (i, a) in ErrorCategory::ALL.iter().enumerate() {
            for b in &ErrorCategory::ALL[i + 1..] {
                assert!(!a.as_str().eq_ignore_ascii_case(b.as_str()));
            }
        }
    }

    #[test]
    fn test_only_unknown_lacks_wire_code() {
        let missing: Vec<_> = ErrorCategory::ALL
            .iter()
            .filter(|c| c.wire_code().is_none())
            .collect();
        assert_eq!(missing, vec![&ErrorCategory::Unknown]);
        assert_eq!(ErrorCategory::default(), ErrorCategory::Unknown);
    }

    #[test]
    fn test_family() {
        assert_eq!(ErrorCategory::InvalidPassword.family(), FaultFamily::Authentication);
        assert_eq!(ErrorCategory::InvalidQueryFilterOperator.family(), FaultFamily::Query);
        assert_eq!(ErrorCategory::StringTooLong.family(), FaultFamily::Validation);
        assert_eq!(ErrorCategory::EntityIsDeleted.family(), FaultFamily::Record);
        assert_eq!(ErrorCategory::Unknown.family(), FaultFamily::Unclassified);

        assert!(ErrorCategory::InvalidClientId.is_authentication());
        assert!(!ErrorCategory::InvalidField.is_authentication());
        assert!(ErrorCategory::RequiredFieldMissing.is_validation());
        assert!(!ErrorCategory::NotFound.is_validation());
    }

    #[test]
    fn test_from_str_and_display() {
        let category: ErrorCategory = "entity_is_deleted".parse().unwrap();
        assert_eq!(category, ErrorCategory::EntityIsDeleted);
        assert_eq!(category.to_string(), "EntityIsDeleted");
        assert_eq!(ErrorCategory::from("NOPE"), ErrorCategory::Unknown);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ErrorCategory::MalformedId).unwrap();
        assert_eq!(json, r#""MalformedId""#);

        let category: ErrorCategory = serde_json::from_str(r#""MALFORMED_ID""#).unwrap();
        assert_eq!(category, ErrorCategory::MalformedId);

        let category: ErrorCategory = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(category, ErrorCategory::Unknown);
    }
}
