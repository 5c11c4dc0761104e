//! # Console Contract
//!
//! The fixed lines the fixture writes to stdout. A debug adapter test
//! harness matches on these bytes, so they are kept exactly as they are,
//! including the missing newline after the calculating prompt and the space
//! before the embedded newline in the footer.
//!
//! Every write is flushed immediately. The calculating prompt has no
//! newline, and after the footer the process never returns to flush
//! anything on its own.

use std::io::Write;

use crate::error::{ConsoleStage, FixtureError, Result};

/// First line, written before any calculation
pub const GREETING: &str = "Hello, Tester!\n";

/// Prompt written right before the one-shot calculation
pub const CALCULATING: &str = "Simple calculating...";

/// Written after the one-shot calculation, right before the endless run
pub const FOOTER: &str = "If it was 4, it's ok. \nLet's calculate an infinite sequence!\n";

/// Write one line and flush it
///
/// ## Errors
///
/// Returns [`FixtureError::Console`] naming the stage if a write or flush fails.
pub fn write_stage<W: Write>(out: &mut W, stage: ConsoleStage) -> Result<()>
{
    let text = match stage {
        ConsoleStage::Greeting => GREETING,
        ConsoleStage::Calculating => CALCULATING,
        ConsoleStage::Footer => FOOTER,
    };

    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| FixtureError::console(stage, e))
}

/// Write the greeting and the calculating prompt
///
/// Stops at the first failed write; the prompt is not attempted if the
/// greeting fails.
///
/// ## Errors
///
/// Returns [`FixtureError::Console`] naming the stage if a write or flush fails.
pub fn write_banner<W: Write>(out: &mut W) -> Result<()>
{
    write_stage(out, ConsoleStage::Greeting)?;
    write_stage(out, ConsoleStage::Calculating)
}

/// Write the footer
///
/// ## Errors
///
/// Returns [`FixtureError::Console`] naming the stage if a write or flush fails.
pub fn write_footer<W: Write>(out: &mut W) -> Result<()>
{
    write_stage(out, ConsoleStage::Footer)
}
