//! Compile-time seeds and the documented sanity value.

use crate::sequence::{sum, SeedPair};

/// Seeds of the first sequence, f0
pub const F0_SEED: SeedPair = SeedPair::new(0, 1);

/// Seeds of the second sequence, f1
pub const F1_SEED: SeedPair = SeedPair::new(1, 2);

/// `n-1` seed of the third sequence, f2
///
/// Its `n-2` seed comes from [`sum`] at runtime, see [`f2_seed`].
pub const F2_N_MINUS_1: i32 = 5;

/// Value the one-shot calculation is documented to produce
///
/// This is what the footer line ("If it was 4, it's ok.") asks the person
/// at the debugger to look for. Nothing checks it automatically.
pub const EXPECTED_SANITY_VALUE: i32 = 4;

/// Seeds of the third sequence, f2
///
/// The `n-2` seed is `sum(1, 2)` so there is a real call to step into
/// before the first calculation.
#[must_use]
pub fn f2_seed() -> SeedPair
{
    SeedPair::new(sum(1, 2), F2_N_MINUS_1)
}

/// All three seed pairs in sequence order
#[must_use]
pub fn default_seeds() -> [SeedPair; 3]
{
    [F0_SEED, F1_SEED, f2_seed()]
}
