//! Tests for logging initialization
//!
//! Installing a subscriber is process-wide, so everything that touches it
//! lives in this one test binary and one test.

use fibtarget_utils::{init_logging, LoggingError};

#[test]
fn test_second_init_is_rejected()
{
    let _first = init_logging().expect("first initialization succeeds");

    match init_logging() {
        Err(LoggingError::InitializationFailed(message)) => assert!(!message.is_empty()),
        other => panic!("expected InitializationFailed, got {other:?}"),
    }
}
