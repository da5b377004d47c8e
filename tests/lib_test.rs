use sift::{Error, Result};

#[test]
fn test_error_display() {
    let err = Error::Provision("test error".to_string());
    assert_eq!(format!("{}", err), "Provisioning error: test error");

    let err = Error::Parse("unexpected token".to_string());
    assert_eq!(format!("{}", err), "Parse error: unexpected token");

    let err = Error::NoDocument;
    assert_eq!(format!("{}", err), "No document available to query");
}

#[test]
fn test_result_type() {
    fn returns_ok() -> Result<i32> {
        Ok(42)
    }

    fn returns_err() -> Result<i32> {
        Err(Error::Provision("test error".to_string()))
    }

    assert!(returns_ok().is_ok());
    assert!(returns_err().is_err());
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io_err.into();
    assert!(format!("{}", err).contains("IO error"));
}
