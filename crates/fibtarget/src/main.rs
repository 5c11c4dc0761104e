//! fibtarget: a debuggee that never finishes.
//!
//! Prints a greeting, does one step of three Fibonacci sequences, prints a
//! footer, then steps the sequences forever. Attach a debugger, break in
//! `fibtarget_core::stepper::run_forever` and watch the windows change.
//!
//! Stdout carries only the fixed lines; diagnostics go to stderr.

use std::io;

use fibtarget_core::{calc_once, console, run_forever, SanityReport};
use fibtarget_utils::{debug, info, init_logging, warn};

fn main()
{
    // Held for the life of the process; run_forever never returns.
    let _logging = match init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("fibtarget: continuing without logs: {e}");
            None
        }
    };

    info!(pid = std::process::id(), "fixture starting");

    let mut stdout = io::stdout().lock();

    if let Err(e) = console::write_banner(&mut stdout) {
        warn!(error = %e, "console write failed");
    }

    let report = SanityReport::from_stepper(&calc_once());
    debug!(%report, matches = report.matches_expected(), "one-shot calculation done");

    if let Err(e) = console::write_footer(&mut stdout) {
        warn!(error = %e, "console write failed");
    }
    drop(stdout);

    debug!("entering infinite sequence");
    run_forever()
}
