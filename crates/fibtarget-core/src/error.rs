//! # Error Types
//!
//! Error handling for the fixture.
//!
//! The stepper itself cannot fail: overflow wraps and there is no input to
//! validate. The only fallible work is writing the fixed lines to the
//! console, so that is all this module describes.

use std::fmt;
use std::io;

use thiserror::Error;

/// Point in the startup sequence where a console write happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStage
{
    /// `"Hello, Tester!\n"`
    Greeting,
    /// `"Simple calculating..."`
    Calculating,
    /// The line printed after the one-shot calculation
    Footer,
}

impl fmt::Display for ConsoleStage
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            ConsoleStage::Greeting => "greeting",
            ConsoleStage::Calculating => "calculating prompt",
            ConsoleStage::Footer => "footer",
        };
        f.write_str(name)
    }
}

/// Main error type for fixture operations
#[derive(Error, Debug)]
pub enum FixtureError
{
    /// Writing or flushing one of the fixed console lines failed
    ///
    /// This usually means stdout was closed by whoever launched the fixture
    /// (a debug adapter that stopped reading, a broken pipe, etc.). The
    /// binary logs it and keeps going, since the infinite run does not
    /// depend on stdout.
    #[error("Failed to write {stage} to the console: {source}")]
    Console
    {
        /// Which line was being written
        stage: ConsoleStage,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl FixtureError
{
    /// Wrap an I/O error raised while writing `stage`
    #[must_use]
    pub fn console(stage: ConsoleStage, source: io::Error) -> Self
    {
        FixtureError::Console { stage, source }
    }
}

/// Convenience alias for fixture results
pub type Result<T> = std::result::Result<T, FixtureError>;
