//! Tests for error handling

use std::error::Error;
use std::io;

use fibtarget_core::error::{ConsoleStage, FixtureError, Result};

#[test]
fn test_console_error_display()
{
    let error = FixtureError::console(
        ConsoleStage::Footer,
        io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
    );
    let message = format!("{}", error);
    assert!(message.contains("footer"));
    assert!(message.contains("pipe closed"));
}

#[test]
fn test_console_error_source()
{
    let error = FixtureError::console(
        ConsoleStage::Greeting,
        io::Error::new(io::ErrorKind::WriteZero, "short write"),
    );
    let source = error.source().expect("console errors carry their io::Error");
    assert_eq!(source.to_string(), "short write");
}

#[test]
fn test_stage_display()
{
    assert_eq!(ConsoleStage::Greeting.to_string(), "greeting");
    assert_eq!(ConsoleStage::Calculating.to_string(), "calculating prompt");
    assert_eq!(ConsoleStage::Footer.to_string(), "footer");
}

#[test]
fn test_result_type()
{
    fn returns_result() -> Result<i32>
    {
        Ok(42)
    }

    assert_eq!(returns_result().unwrap(), 42);
}
