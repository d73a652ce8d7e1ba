//! Error Context Tests

use std::io;
use tcache_domain::error::Error;
use tcache_infrastructure::error_ext::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_io_context() {
    let error = failing().io_context("Reading settings").unwrap_err();
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "Reading settings: gone");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let error = failing().config_context("Loading").unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
    assert_eq!(error.to_string(), "Configuration error: Loading: gone");
}

#[test]
fn test_plain_context() {
    let error = failing().context("Step").unwrap_err();
    assert!(matches!(error, Error::Internal { .. }));
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.io_context("unused").unwrap(), 7);
}
