//! Arithmetic progressions
//!
//! Both generators accumulate by repeated addition, so floating point steps
//! drift exactly as a hand-written `x += step` loop would
//! (`0.0, 0.2, 0.4, 0.6000000000000001, ...`).

use std::iter::FusedIterator;
use std::ops::Add;

use num_traits::{CheckedAdd, Zero};

/// Advance a [`range`] cursor by one step.
///
/// `None` means the next value is not representable, which ends the range.
/// Integers use checked addition; floats saturate to infinity on their own
/// and always step.
pub trait Step: Copy {
    /// `self + by`, or `None` on overflow.
    fn step(self, by: Self) -> Option<Self>;
}

macro_rules! step_checked {
    ($($int:ty),+) => {
        $(
            impl Step for $int {
                fn step(self, by: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &by)
                }
            }
        )+
    };
}

step_checked!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Step for f32 {
    fn step(self, by: Self) -> Option<Self> {
        Some(self + by)
    }
}

impl Step for f64 {
    fn step(self, by: Self) -> Option<Self> {
        Some(self + by)
    }
}

/// Endless progression `start, start + step, start + 2·step, ...`
///
/// Built by [`infinity`].
#[derive(Debug, Clone)]
pub struct Infinity<T> {
    current: T,
    step: T,
    // The step is applied on the pull that needs it, never ahead of time
    pending: bool,
}

/// Generate numbers endlessly from `start` (included).
///
/// A zero `step` yields `start` forever. Overflow behaves like the type's
/// own `Add`, and only happens when an unrepresentable element is pulled.
pub fn infinity<T>(start: T, step: T) -> Infinity<T>
where
    T: Copy + Add<Output = T>,
{
    Infinity {
        current: start,
        step,
        pending: false,
    }
}

impl<T> Iterator for Infinity<T>
where
    T: Copy + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pending {
            self.current = self.current + self.step;
        }
        self.pending = true;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Direction of a [`StepRange`], fixed by the sign of its step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// `step > 0`: continue while `current < end`
    Ascending,
    /// `step <= 0`: continue while `current > end`
    Descending,
}

/// Finite progression from `start` (included) to `end` (excluded).
///
/// Built by [`range`].
#[derive(Debug, Clone)]
pub struct StepRange<T> {
    // `None` once finished, including when the next step overflowed
    current: Option<T>,
    end: T,
    step: T,
    direction: Direction,
}

/// Generate numbers from `start` (included) to `end` (excluded).
///
/// The sign of `step` picks the direction. A range that cannot be walked in
/// that direction is empty rather than an error.
///
/// A zero step counts as descending. With `start > end` it yields `start`
/// forever; with `start <= end` it is empty. A step that would leave the
/// type's range ends the sequence.
pub fn range<T>(start: T, end: T, step: T) -> StepRange<T>
where
    T: Step + PartialOrd + Zero,
{
    let direction = if step > T::zero() {
        Direction::Ascending
    } else {
        Direction::Descending
    };
    StepRange {
        current: Some(start),
        end,
        step,
        direction,
    }
}

impl<T> StepRange<T>
where
    T: Copy + PartialOrd,
{
    fn in_bounds(&self, value: T) -> bool {
        match self.direction {
            Direction::Ascending => value < self.end,
            Direction::Descending => value > self.end,
        }
    }
}

impl<T> Iterator for StepRange<T>
where
    T: Step + PartialOrd,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.current?;
        if !self.in_bounds(value) {
            // Stay finished even if a later step would re-enter the bounds
            self.current = None;
            return None;
        }
        self.current = value.step(self.step);
        Some(value)
    }
}

impl<T> FusedIterator for StepRange<T> where T: Step + PartialOrd {}
