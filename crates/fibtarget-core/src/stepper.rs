//! # Sequence Stepper
//!
//! Advances the three windows in lockstep. The same [`Stepper::step_all`]
//! drives both the one-shot sanity pass ([`calc_once`]) and the endless run
//! ([`run_forever`]).
//!
//! ## Keeping state visible to a debugger
//!
//! Nothing ever reads the windows during the endless run, so an optimizing
//! compiler is free to drop every store. After each step the stepper is
//! handed to [`std::hint::black_box`], which makes the compiler assume the
//! windows may be read through that reference. The values therefore stay in
//! addressable memory and change on every iteration, in debug and release
//! builds alike.

use std::hint::black_box;

use tracing::trace;

use crate::seeds::default_seeds;
use crate::sequence::{SeedPair, Window};

/// Phase of a stepper's life
///
/// `Initializing -> Running` happens once, on the first call to
/// [`Stepper::enter_running`]. There is no transition out of `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    /// Seeded, possibly advanced by the one-shot pass
    Initializing,
    /// Advancing forever
    Running,
}

/// Three rolling windows advanced together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stepper
{
    windows: [Window; 3],
    phase: Phase,
}

impl Stepper
{
    /// Create a stepper from three seed pairs
    #[must_use]
    pub fn new(seeds: [SeedPair; 3]) -> Self
    {
        Stepper {
            windows: seeds.map(Window::seeded),
            phase: Phase::Initializing,
        }
    }

    /// Create a stepper seeded with `(0, 1)`, `(1, 2)` and `(sum(1, 2), 5)`
    #[must_use]
    pub fn with_default_seeds() -> Self
    {
        Stepper::new(default_seeds())
    }

    /// Advance every window by exactly one step
    pub fn step_all(&mut self)
    {
        for window in &mut self.windows {
            window.step();
        }
    }

    /// The three windows, in sequence order (f0, f1, f2)
    #[must_use]
    pub fn windows(&self) -> &[Window; 3]
    {
        &self.windows
    }

    /// The `n` value of each window
    #[must_use]
    pub fn current(&self) -> [i32; 3]
    {
        self.windows.map(|w| w.n)
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    /// Move to [`Phase::Running`]
    ///
    /// Calling it again while already running has no effect.
    pub fn enter_running(&mut self)
    {
        if self.phase == Phase::Initializing {
            trace!("stepper entering running phase");
            self.phase = Phase::Running;
        }
    }
}

impl Default for Stepper
{
    fn default() -> Self
    {
        Stepper::with_default_seeds()
    }
}

/// Seed a fresh stepper and advance it exactly one step
///
/// Every call starts from the default seeds; there is no shared state
/// between calls.
///
/// ```rust
/// use fibtarget_core::stepper::calc_once;
///
/// assert_eq!(calc_once().current(), [1, 3, 8]);
/// assert_eq!(calc_once(), calc_once());
/// ```
#[inline(never)]
#[must_use]
pub fn calc_once() -> Stepper
{
    let mut stepper = Stepper::with_default_seeds();
    stepper.step_all();
    black_box(&mut stepper);
    stepper
}

/// Seed a fresh stepper and advance it forever
///
/// The windows start again from the default seeds rather than continuing
/// from [`calc_once`]. This never returns; the process has to be killed
/// from outside.
#[inline(never)]
pub fn run_forever() -> !
{
    let mut stepper = running_stepper();
    loop {
        run_iteration(&mut stepper);
    }
}

/// Freshly seeded stepper already in [`Phase::Running`]
fn running_stepper() -> Stepper
{
    let mut stepper = Stepper::with_default_seeds();
    stepper.enter_running();
    stepper
}

/// One pass of the endless loop
#[inline]
fn run_iteration(stepper: &mut Stepper)
{
    stepper.step_all();
    black_box(stepper);
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_new_starts_initializing()
    {
        let stepper = Stepper::with_default_seeds();
        assert_eq!(stepper.phase(), Phase::Initializing);
        assert_eq!(stepper.current(), [0, 0, 0]);
    }

    #[test]
    fn test_step_all_advances_each_window_once()
    {
        let mut stepper = Stepper::new([SeedPair::new(0, 1), SeedPair::new(1, 2), SeedPair::new(3, 5)]);
        stepper.step_all();
        assert_eq!(stepper.current(), [1, 3, 8]);
        stepper.step_all();
        assert_eq!(stepper.current(), [2, 5, 13]);
    }

    #[test]
    fn test_windows_are_independent()
    {
        let mut stepper = Stepper::new([SeedPair::new(0, 0), SeedPair::new(1, 1), SeedPair::new(-1, -1)]);
        stepper.step_all();
        assert_eq!(stepper.current(), [0, 2, -2]);
    }

    #[test]
    fn test_enter_running_is_one_way()
    {
        let mut stepper = Stepper::default();
        stepper.enter_running();
        assert_eq!(stepper.phase(), Phase::Running);
        stepper.enter_running();
        assert_eq!(stepper.phase(), Phase::Running);
    }

    #[test]
    fn test_calc_once_is_deterministic()
    {
        let first = calc_once();
        let second = calc_once();
        assert_eq!(first, second);
        assert_eq!(first.phase(), Phase::Initializing);
    }

    #[test]
    fn test_endless_run_starts_from_fresh_seeds()
    {
        let stepper = running_stepper();
        assert_eq!(stepper.phase(), Phase::Running);
        assert_eq!(stepper.windows(), Stepper::with_default_seeds().windows());
    }

    #[test]
    fn test_endless_run_iterations_match_step_all()
    {
        let mut looping = running_stepper();
        let mut reference = Stepper::with_default_seeds();

        for i in 1..=200 {
            let before = *looping.windows();
            run_iteration(&mut looping);
            reference.step_all();

            assert_eq!(looping.windows(), reference.windows(), "diverged at iteration {i}");
            for (after, before) in looping.windows().iter().zip(before.iter()) {
                assert!(after.follows(before), "iteration {i}: {after:?} does not follow {before:?}");
            }
        }
        assert_eq!(looping.phase(), Phase::Running);
    }
}
