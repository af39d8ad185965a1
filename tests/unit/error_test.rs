//! Tests for error types

use deferq::core::DispatchError;

#[test]
fn test_full_error_display() {
    assert_eq!(format!("{}", DispatchError::Full), "queue full");
}

#[test]
fn test_empty_error_display() {
    assert_eq!(format!("{}", DispatchError::Empty), "queue empty");
}

#[test]
fn test_not_found_error_display() {
    assert_eq!(
        format!("{}", DispatchError::NotFound),
        "no matching scheduled entry"
    );
}

#[test]
fn test_statuses_are_comparable() {
    assert_eq!(DispatchError::Full, DispatchError::Full);
    assert_ne!(DispatchError::Full, DispatchError::Empty);
}
