//! # fibtarget-core
//!
//! The moving parts of the fibtarget debuggee.
//!
//! This crate provides:
//! - Rolling windows over Fibonacci-style sequences ([`sequence`])
//! - The stepper that advances three of them in lockstep ([`stepper`])
//! - The compile-time seeds ([`seeds`])
//! - The fixed console lines ([`console`])
//! - A report of the one-shot calculation ([`sanity`])
//!
//! ## Lifecycle
//!
//! 1. Write the greeting and the calculating prompt
//! 2. [`calc_once`]: one step of all three sequences
//! 3. Write the footer
//! 4. [`run_forever`]: step all three sequences until the process is killed
//!
//! No `unsafe` is needed to keep the windows observable; see [`stepper`].

pub mod console;
pub mod error;
pub mod sanity;
pub mod seeds;
pub mod sequence;
pub mod stepper;

// Re-export commonly used types
pub use error::{ConsoleStage, FixtureError, Result};
pub use sanity::SanityReport;
pub use sequence::{sum, SeedPair, Window};
pub use stepper::{calc_once, run_forever, Phase, Stepper};
