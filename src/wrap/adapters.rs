//! Index-aware lazy adapters
//!
//! Predicates receive `(&value, index)` where `index` is the 0-based
//! position of the element in the source the adapter reads from.

use std::fmt;
use std::iter::FusedIterator;

/// Keeps elements whose predicate holds.
pub struct Filter<I, P> {
    source: I,
    predicate: P,
    index: usize,
}

impl<I, P> Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            index: 0,
        }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.source.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Keeps and refines elements for which the refinement returns `Some`.
pub struct Narrow<I, F> {
    source: I,
    refine: F,
    index: usize,
}

impl<I, F> Narrow<I, F> {
    pub(crate) fn new<U>(source: I, refine: F) -> Self
    where
        I: Iterator,
        F: FnMut(I::Item, usize) -> Option<U>,
    {
        Self {
            source,
            refine,
            index: 0,
        }
    }
}

impl<I, F, U> Iterator for Narrow<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        for item in self.source.by_ref() {
            let index = self.index;
            self.index += 1;
            if let Some(refined) = (self.refine)(item, index) {
                return Some(refined);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Yields elements until the predicate first fails, then stops for good.
pub struct TakeWhile<I, P> {
    source: I,
    predicate: P,
    index: usize,
    done: bool,
}

impl<I, P> TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            index: 0,
            done: false,
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let item = match self.source.next() {
            Some(item) => item,
            None => {
                self.done = true;
                return None;
            }
        };
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item, index) {
            Some(item)
        } else {
            // Predicate is never consulted again
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}

// Closures are not `Debug`; show the source and cursor position only.
macro_rules! debug_without_closure {
    ($($name:ident),+) => {
        $(
            impl<I: fmt::Debug, P> fmt::Debug for $name<I, P> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($name))
                        .field("source", &self.source)
                        .field("index", &self.index)
                        .finish_non_exhaustive()
                }
            }
        )+
    };
}

debug_without_closure!(Filter, Narrow, TakeWhile);

macro_rules! clone_with_closure {
    ($name:ident { $($field:ident),+ }) => {
        impl<I: Clone, P: Clone> Clone for $name<I, P> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone()),+
                }
            }
        }
    };
}

clone_with_closure!(Filter { source, predicate, index });
clone_with_closure!(Narrow { source, refine, index });
clone_with_closure!(TakeWhile { source, predicate, index, done });
