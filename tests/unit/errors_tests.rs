/*!
 * Tests for error kinds reported at the run boundary
 */

use anyhow::{Context, anyhow};
use epgtidy::errors::{EpgError, kind_of};

/// Test that a bare library error reports its own kind
#[test]
fn test_kindOf_withEpgError_shouldReturnKind() {
    let error = anyhow::Error::from(EpgError::Fetch("connection refused".to_string()));

    assert_eq!(kind_of(&error), "fetch");
}

/// Test that context layers do not hide the library error kind
#[test]
fn test_kindOf_withContextOverParseError_shouldReturnParse() {
    let result: Result<(), EpgError> = Err(EpgError::Parse("bad markup".to_string()));
    let error = result
        .context("Failed to decode guide")
        .context("Normalize failed")
        .unwrap_err();

    assert_eq!(kind_of(&error), "parse");
}

/// Test that errors from outside the guide pipeline are labelled other
#[test]
fn test_kindOf_withPlainAnyhowError_shouldReturnOther() {
    assert_eq!(kind_of(&anyhow!("Output path must not be empty")), "other");
}
