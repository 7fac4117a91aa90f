//! Error context extension tests

use std::error::Error as _;

use jobmatch_domain::Error;
use jobmatch_infrastructure::error_ext::{ErrorContext, registry_error};

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = io_failure().context("reading seed").unwrap_err();
    assert!(matches!(err, Error::Infrastructure { .. }));
    assert_eq!(err.to_string(), "Infrastructure error: reading seed: gone");
    assert!(err.source().is_some());
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let err = io_failure().config_context("loading").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("gone"));
}

#[test]
fn test_success_passes_through() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(7);
    assert_eq!(ok.context("unused").unwrap(), 7);
}

#[test]
fn test_registry_error_names_the_kind() {
    let err = registry_error("cache", "Unknown cache provider 'x'".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: cache provider: Unknown cache provider 'x'"
    );
}
