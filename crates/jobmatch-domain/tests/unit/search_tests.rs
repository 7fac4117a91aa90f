//! Search request and result tests

use chrono::{Duration, Utc};
use jobmatch_domain::constants::{DEFAULT_SEARCH_LIMIT, MAX_EXPORT_LIMIT, MAX_INTERACTIVE_LIMIT};
use jobmatch_domain::{CacheEntry, Error, SearchMode, SearchRequest, SearchResult};

fn request() -> SearchRequest {
    SearchRequest::new(vec!["typescript".into(), "azure".into()])
}

#[test]
fn test_defaults() {
    let req = request();
    assert_eq!(req.limit, DEFAULT_SEARCH_LIMIT);
    assert_eq!(req.offset, 0);
    assert!(req.location.is_none());
}

#[test]
fn test_parse_skills_trims_and_drops_empty() {
    assert_eq!(
        SearchRequest::parse_skills(" typescript, ,azure ,,"),
        vec!["typescript", "azure"]
    );
    assert!(SearchRequest::parse_skills(" , ").is_empty());
}

#[test]
fn test_validate_rejects_missing_skills() {
    let err = SearchRequest::new(vec!["  ".into()])
        .validate(SearchMode::Interactive)
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_validate_rejects_negative_salary() {
    let err = request()
        .with_salary_min(-1)
        .validate(SearchMode::Interactive)
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    let err = request()
        .with_salary_max(-5)
        .validate(SearchMode::Interactive)
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_validate_rejects_zero_limit() {
    let err = request()
        .with_limit(0)
        .validate(SearchMode::Interactive)
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_validate_clamps_limit_per_mode() {
    let interactive = request()
        .with_limit(5000)
        .validate(SearchMode::Interactive)
        .unwrap();
    assert_eq!(interactive.limit, MAX_INTERACTIVE_LIMIT);

    let export = request()
        .with_limit(5000)
        .validate(SearchMode::Export)
        .unwrap();
    assert_eq!(export.limit, MAX_EXPORT_LIMIT);
}

#[test]
fn test_export_forces_offset_zero() {
    let export = request()
        .with_offset(40)
        .validate(SearchMode::Export)
        .unwrap();
    assert_eq!(export.offset, 0);

    let interactive = request()
        .with_offset(40)
        .validate(SearchMode::Interactive)
        .unwrap();
    assert_eq!(interactive.offset, 40);
}

#[test]
fn test_blank_location_becomes_absent() {
    let req = request()
        .with_location("   ")
        .validate(SearchMode::Interactive)
        .unwrap();
    assert!(req.location.is_none());

    let req = request()
        .with_location("  Remote ")
        .validate(SearchMode::Interactive)
        .unwrap();
    assert_eq!(req.location.as_deref(), Some("Remote"));
}

#[test]
fn test_request_serializes_in_fixed_field_order() {
    let json = serde_json::to_string(&request().with_location("Remote")).unwrap();
    assert_eq!(
        json,
        r#"{"skills":["typescript","azure"],"location":"Remote","salaryMin":null,"salaryMax":null,"limit":10,"offset":0}"#
    );
}

#[test]
fn test_cache_entry_expiry() {
    let now = Utc::now();
    let entry = CacheEntry {
        expires_at: now + Duration::seconds(300),
        result: SearchResult {
            job_listings: vec![],
            total: 0,
            limit: 10,
            offset: 0,
        },
    };

    assert!(!entry.is_expired(now));
    assert!(entry.is_expired(now + Duration::seconds(300)));
}
