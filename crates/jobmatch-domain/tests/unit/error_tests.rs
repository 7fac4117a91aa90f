//! Unit tests for domain error types

use jobmatch_domain::Error;

#[test]
fn test_validation_error() {
    let error = Error::validation("at least one skill is required");
    match error {
        Error::Validation { message } => assert_eq!(message, "at least one skill is required"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_search_failed_keeps_source() {
    let cause = Error::database("connection refused");
    let error = Error::search_failed("Failed to search jobs", cause);

    assert!(error.is_search_failure());
    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("connection refused"));
}

#[test]
fn test_other_errors_are_not_search_failures() {
    assert!(!Error::cache("down").is_search_failure());
    assert!(!Error::event_bus("down").is_search_failure());
    assert!(!Error::validation("bad").is_search_failure());
}

#[test]
fn test_feature_disabled_display() {
    let error = Error::feature_disabled("export");
    assert_eq!(error.to_string(), "Feature disabled: export");
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "seed.json");
    let error: Error = io_err.into();
    assert!(error.to_string().contains("seed.json"));
}
