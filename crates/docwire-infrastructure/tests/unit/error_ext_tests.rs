//! Error Extension Tests

use docwire_domain::error::Error;
use docwire_infrastructure::error_ext::ErrorContext;
use std::io;

fn failing_io() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_internal() {
    let err = failing_io().context("Reading registry").unwrap_err();
    match err {
        Error::Internal { message } => assert_eq!(message, "Reading registry: missing"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context evaluated on success") })
        .unwrap();
    assert_eq!(value, 7);
}

#[test]
fn test_io_context_keeps_source() {
    let err = failing_io().io_context("Failed to read config file").unwrap_err();
    match &err {
        Error::Io { message, source } => {
            assert!(message.starts_with("Failed to read config file"));
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.is_resolution_error());
}

#[test]
fn test_config_context_is_configuration_error() {
    let err = failing_io().config_context("Failed to extract").unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().starts_with("Configuration error: Failed to extract"));
}
