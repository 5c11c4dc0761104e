//! # Rolling Windows
//!
//! A Fibonacci-style sequence is fully described by its two most recent
//! values. [`Window`] keeps those plus the value computed by the last step,
//! so a debugger looking at one window sees `n-2`, `n-1` and `n` side by side.
//!
//! f(n) = f(n-1) + f(n-2) -> 0, 1, 1, 2, 3, 5, 8, 13, 21, 34, ...
//!
//! Arithmetic is on `i32` and wraps on overflow. The infinite run passes
//! `i32::MAX` within a few dozen steps, and a debug build must not panic
//! there.

/// Add two integers
///
/// Kept out of line so a debugger can set a breakpoint on it and step in
/// while the third seed is being computed.
#[inline(never)]
#[must_use]
pub fn sum(a: i32, b: i32) -> i32
{
    a.wrapping_add(b)
}

/// The two starting values of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPair
{
    /// Value at step n-2
    pub n_minus_2: i32,
    /// Value at step n-1
    pub n_minus_1: i32,
}

impl SeedPair
{
    /// Create a seed pair from the `n-2` and `n-1` values
    pub const fn new(n_minus_2: i32, n_minus_1: i32) -> Self
    {
        SeedPair { n_minus_2, n_minus_1 }
    }
}

/// Rolling window over one sequence
///
/// `#[repr(C)]` keeps the field order stable in memory, which makes the
/// window easy to read with a raw memory dump (three consecutive `i32`s).
///
/// ## Example
///
/// ```rust
/// use fibtarget_core::sequence::{SeedPair, Window};
///
/// let mut window = Window::seeded(SeedPair::new(0, 1));
/// assert_eq!(window.step(), 1);
/// assert_eq!(window.step(), 2);
/// assert_eq!(window.step(), 3);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window
{
    /// Value at step n-2
    pub n_minus_2: i32,
    /// Value at step n-1
    pub n_minus_1: i32,
    /// Value computed by the most recent step
    ///
    /// Before the first step this is zero; no value has been computed yet.
    pub n: i32,
}

impl Window
{
    /// Start a window from its seed pair
    pub const fn seeded(seed: SeedPair) -> Self
    {
        Window {
            n_minus_2: seed.n_minus_2,
            n_minus_1: seed.n_minus_1,
            n: 0,
        }
    }

    /// Advance by one step and return the new `n`
    ///
    /// Computes `n = n-1 + n-2`, then shifts: `n-1` becomes `n-2` and `n`
    /// becomes `n-1`.
    pub fn step(&mut self) -> i32
    {
        self.n = self.n_minus_1.wrapping_add(self.n_minus_2);
        self.n_minus_2 = self.n_minus_1;
        self.n_minus_1 = self.n;
        self.n
    }

    /// Whether this window is exactly one step past `previous`
    ///
    /// Checks the recurrence against the values `previous` held before the
    /// step, and that the window shifted.
    #[must_use]
    pub fn follows(&self, previous: &Window) -> bool
    {
        self.n == previous.n_minus_1.wrapping_add(previous.n_minus_2)
            && self.n_minus_2 == previous.n_minus_1
            && self.n_minus_1 == self.n
    }
}

impl From<SeedPair> for Window
{
    fn from(seed: SeedPair) -> Self
    {
        Window::seeded(seed)
    }
}
