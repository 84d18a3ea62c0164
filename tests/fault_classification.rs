//! Integration tests for Salesforce fault classification.

use integrations_salesforce::{
    create_fault_from_response, ErrorCategory, ErrorResponseParser, FaultFamily, ParserConfig,
    ServiceFault, ServiceResult,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("NOT_FOUND", ErrorCategory::NotFound)]
#[test_case("malformedquery", ErrorCategory::MalformedQuery)]
#[test_case("Field_Custom_Validation_Exception", ErrorCategory::FieldCustomValidationException)]
#[test_case("invalid_field_for_insert_update", ErrorCategory::InvalidFieldForInsertUpdate)]
#[test_case("INVALID_QUERY_FILTER_OPERATOR", ErrorCategory::InvalidQueryFilterOperator)]
#[test_case("invalid_client_id", ErrorCategory::InvalidClientId)]
#[test_case("invalid_client", ErrorCategory::InvalidClient)]
#[test_case("authentication_failure", ErrorCategory::AuthenticationFailure)]
#[test_case("totally_bogus_code", ErrorCategory::Unknown)]
#[test_case("", ErrorCategory::Unknown)]
fn test_resolves_wire_codes(code: &str, expected: ErrorCategory) {
    assert_eq!(ServiceFault::from_code(code, "x").category(), expected);
}

#[test]
fn test_not_found_scenario() {
    let fault = ServiceFault::from_code("NOT_FOUND", "Resource unavailable");

    assert_eq!(fault.category(), ErrorCategory::NotFound);
    assert_eq!(fault.description(), "Resource unavailable");
    assert!(fault.fields().is_empty());
}

#[test]
fn test_malformed_query_scenario() {
    let fault = ServiceFault::from_code("malformedquery", "bad SOQL");

    assert_eq!(fault.category(), ErrorCategory::MalformedQuery);
    assert_eq!(fault.description(), "bad SOQL");
}

#[test]
fn test_explicit_category_round_trip() {
    let fault = ServiceFault::new(ErrorCategory::InvalidField, "bad field");

    assert_eq!(
        fault.into_parts(),
        (ErrorCategory::InvalidField, "bad field".to_string(), Vec::new())
    );
}

#[test]
fn test_required_field_missing_keeps_field_order() {
    let fault = ServiceFault::with_fields(
        "REQUIRED_FIELD_MISSING",
        "missing required field",
        vec!["Name", "Email"],
    );

    assert_eq!(fault.category(), ErrorCategory::RequiredFieldMissing);
    assert_eq!(fault.fields(), &["Name".to_string(), "Email".to_string()]);
}

#[test]
fn test_callers_branch_on_family_without_string_matching() {
    fn describe(result: ServiceResult<()>) -> &'static str {
        match result {
            Ok(()) => "ok",
            Err(fault) => match fault.family() {
                FaultFamily::Authentication => "login again",
                FaultFamily::Validation => "fix the record",
                FaultFamily::Query => "fix the query",
                FaultFamily::Record => "record unavailable",
                FaultFamily::Unclassified => "unexpected",
            },
        }
    }

    let login = ErrorResponseParser::default().parse(
        400,
        r#"{"error":"invalid_grant","error_description":"expired access/refresh token"}"#,
    );
    let record = ErrorResponseParser::default().parse(
        400,
        r#"[{"message":"Account Name: value too long","errorCode":"STRING_TOO_LONG","fields":["Name"]}]"#,
    );

    assert_eq!(describe(Err(login)), "login again");
    assert_eq!(describe(Err(record)), "fix the record");
    assert_eq!(describe(Ok(())), "ok");
}

#[test]
fn test_faults_propagate_with_question_mark() {
    fn update_account() -> ServiceResult<u32> {
        Err(create_fault_from_response(
            404,
            r#"[{"message":"entity is deleted","errorCode":"ENTITY_IS_DELETED","fields":[]}]"#,
        ))
    }

    fn run() -> Result<u32, Box<dyn std::error::Error>> {
        Ok(update_account()?)
    }

    let error = run().unwrap_err();
    assert_eq!(error.to_string(), "entity is deleted");

    let fault = error.downcast_ref::<ServiceFault>().unwrap();
    assert_eq!(fault.category(), ErrorCategory::EntityIsDeleted);
}

#[test]
fn test_serialized_fault_crosses_boundaries_intact() {
    let fault = ServiceFault::with_fields(
        "FIELD_CUSTOM_VALIDATION_EXCEPTION",
        "Close date must be in the future",
        ["CloseDate", "StageName"],
    );

    let json = serde_json::to_string(&fault).unwrap();
    let back: ServiceFault = serde_json::from_str(&json).unwrap();

    assert_eq!(back, fault);
    assert_eq!(back.fields(), fault.fields());
}

#[test]
fn test_unparseable_body_is_truncated_per_config() {
    let config = ParserConfig::builder().max_body_preview(8).build().unwrap();
    let fault = ErrorResponseParser::new(config).parse(500, "Internal Server Error");

    assert_eq!(fault.category(), ErrorCategory::Unknown);
    assert_eq!(fault.description(), "HTTP 500: Internal");
}
