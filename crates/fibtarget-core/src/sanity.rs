//! One-shot sanity report.
//!
//! The fixture tells whoever is watching "If it was 4, it's ok." but never
//! checks that itself. [`SanityReport`] collects what the one-shot pass
//! actually produced so it can be logged next to the documented value. It
//! is informational: a mismatch is reported, never raised.
//!
//! With the default seeds the one-step values are `1`, `3` and `8`, so the
//! third sequence does not equal the documented `4`.

use std::fmt;

use crate::seeds::EXPECTED_SANITY_VALUE;
use crate::stepper::Stepper;

/// What the one-shot calculation produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanityReport
{
    /// `n` of each window after one step
    pub values: [i32; 3],
    /// Documented expected value of the third sequence
    pub expected: i32,
}

impl SanityReport
{
    /// Build a report from a stepper that has run its one-shot pass
    #[must_use]
    pub fn from_stepper(stepper: &Stepper) -> Self
    {
        SanityReport {
            values: stepper.current(),
            expected: EXPECTED_SANITY_VALUE,
        }
    }

    /// Value of the third sequence, the one the footer refers to
    #[must_use]
    pub fn checked_value(&self) -> i32
    {
        self.values[2]
    }

    /// Whether the third sequence matches the documented value
    #[must_use]
    pub fn matches_expected(&self) -> bool
    {
        self.checked_value() == self.expected
    }
}

impl fmt::Display for SanityReport
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let [f0, f1, f2] = self.values;
        write!(f, "f0={f0} f1={f1} f2={f2} (documented: {})", self.expected)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::sequence::SeedPair;
    use crate::stepper::calc_once;

    #[test]
    fn test_report_from_default_run()
    {
        let report = SanityReport::from_stepper(&calc_once());
        assert_eq!(report.values, [1, 3, 8]);
        assert_eq!(report.expected, 4);
        assert_eq!(report.checked_value(), 8);
        assert!(!report.matches_expected());
    }

    #[test]
    fn test_report_matches_when_third_sequence_hits_four()
    {
        let mut stepper = Stepper::new([SeedPair::new(0, 1), SeedPair::new(1, 2), SeedPair::new(1, 3)]);
        stepper.step_all();
        let report = SanityReport::from_stepper(&stepper);
        assert!(report.matches_expected());
    }

    #[test]
    fn test_report_display()
    {
        let report = SanityReport::from_stepper(&calc_once());
        assert_eq!(report.to_string(), "f0=1 f1=3 f2=8 (documented: 4)");
    }
}
