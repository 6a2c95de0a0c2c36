//! Chainable wrapper over a single source
//!
//! `Wrap` holds exactly one source iterator. Lazy methods move the wrapper
//! into a new one that stacks an adapter on top; nothing is pulled from the
//! source until a terminal method (see `terminal.rs`) drains the chain.
//!
//! A wrapped sequence can be consumed once. Clone it first when the source is
//! restartable and the same sequence is needed twice.

mod adapters;
mod terminal;

pub use adapters::{Filter, Narrow, TakeWhile};
pub use terminal::{MapEntry, Seed};

use std::iter;
use std::ops::Add;

use num_traits::{One, Zero};

use crate::generators::{self, Append, Concat, Cycle, Infinity, Repeat, Step, StepRange, Zip, ZipAll, ZipSources};

/// Immutable, chainable adapter around one source iterator
#[derive(Debug, Clone)]
pub struct Wrap<I> {
    source: I,
}

impl<I: Iterator> IntoIterator for Wrap<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.source
    }
}

impl<I: Iterator> Wrap<I> {
    /// Wrap any iterable without copying or consuming it.
    pub fn new<S>(sequence: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: sequence.into_iter(),
        }
    }

    /// Append one or more same-typed sequences after this one.
    pub fn concat<S>(self, others: S) -> Wrap<Append<I, Concat<S::IntoIter>>>
    where
        S: IntoIterator,
        S::Item: IntoIterator<Item = I::Item>,
    {
        Wrap {
            source: generators::append(self.source, generators::concat(others)),
        }
    }

    /// Append a single sequence of any type yielding the same items.
    pub fn append<S>(self, other: S) -> Wrap<Append<I, S::IntoIter>>
    where
        S: IntoIterator<Item = I::Item>,
    {
        Wrap {
            source: generators::append(self.source, other),
        }
    }

    /// Keep only elements whose `(value, index)` satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Wrap<Filter<I, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Wrap {
            source: Filter::new(self.source, predicate),
        }
    }

    /// Filter and refine in one step: keep `Some` results of `refine`.
    ///
    /// The narrowing counterpart of [`Wrap::filter`], for when the test also
    /// tells you something about the element's type.
    pub fn narrow<U, F>(self, refine: F) -> Wrap<Narrow<I, F>>
    where
        F: FnMut(I::Item, usize) -> Option<U>,
    {
        Wrap {
            source: Narrow::new(self.source, refine),
        }
    }

    /// Apply `mapper` to every element.
    pub fn map<U, F>(self, mapper: F) -> Wrap<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Wrap {
            source: self.source.map(mapper),
        }
    }

    /// Take only the first `count` elements.
    ///
    /// Never pulls past element `count`, so it is safe on infinite sources.
    pub fn take(self, count: usize) -> Wrap<iter::Take<I>> {
        Wrap {
            source: self.source.take(count),
        }
    }

    /// Take elements while `predicate` holds on `(value, index)`.
    ///
    /// Stops permanently at the first failure; the predicate is not invoked
    /// again afterwards.
    pub fn take_while<P>(self, predicate: P) -> Wrap<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        Wrap {
            source: TakeWhile::new(self.source, predicate),
        }
    }
}

// Constructors hang off `Wrap<()>` so `Wrap::range(..)` infers without a turbofish
impl Wrap<()> {
    /// Wrap the concatenation of same-typed sequences.
    pub fn concat_all<S>(sequences: S) -> Wrap<Concat<S::IntoIter>>
    where
        S: IntoIterator,
        S::Item: IntoIterator,
    {
        Wrap::new(generators::concat(sequences))
    }

    /// Wrap an endless cycle over a restartable sequence.
    pub fn cycle<S>(sequence: S) -> Wrap<Cycle<S::IntoIter>>
    where
        S: IntoIterator,
        S::IntoIter: Clone,
    {
        Wrap::new(generators::cycle(sequence))
    }

    /// Wrap the endless progression `start, start + step, ...`
    pub fn infinity<T>(start: T, step: T) -> Wrap<Infinity<T>>
    where
        T: Copy + Add<Output = T>,
    {
        Wrap::new(generators::infinity(start, step))
    }

    /// Count up by one from `start`, forever.
    pub fn count_from<T>(start: T) -> Wrap<Infinity<T>>
    where
        T: Copy + Add<Output = T> + One,
    {
        Wrap::infinity(start, T::one())
    }

    /// `0, 1, 2, ...`
    pub fn naturals<T>() -> Wrap<Infinity<T>>
    where
        T: Copy + Add<Output = T> + Zero + One,
    {
        Wrap::count_from(T::zero())
    }

    /// Wrap the progression from `start` (included) to `end` (excluded).
    pub fn range<T>(start: T, end: T, step: T) -> Wrap<StepRange<T>>
    where
        T: Step + PartialOrd + Zero,
    {
        Wrap::new(generators::range(start, end, step))
    }

    /// [`Wrap::range`] with a step of one.
    pub fn range_to<T>(start: T, end: T) -> Wrap<StepRange<T>>
    where
        T: Step + PartialOrd + Zero + One,
    {
        Wrap::range(start, end, T::one())
    }

    /// Wrap `count` repetitions of `value`.
    pub fn repeat<T: Clone>(value: T, count: i64) -> Wrap<Repeat<T>> {
        Wrap::new(generators::repeat(value, count))
    }

    /// Wrap a heterogeneous zip over a tuple of sequences.
    pub fn zip<S: ZipSources>(sequences: S) -> Wrap<Zip<S::Cursors>> {
        Wrap::new(generators::zip(sequences))
    }

    /// Wrap a homogeneous zip over any number of sequences.
    pub fn zip_all<S>(sequences: S) -> Wrap<ZipAll<<S::Item as IntoIterator>::IntoIter>>
    where
        S: IntoIterator,
        S::Item: IntoIterator,
    {
        Wrap::new(generators::zip_all(sequences))
    }
}
