//! Sequential concatenation of sources

use std::fmt;
use std::iter::FusedIterator;

/// Drains each source fully before opening the next one.
///
/// Built by [`concat`].
pub struct Concat<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    sources: S,
    current: Option<<S::Item as IntoIterator>::IntoIter>,
}

/// Concatenate a list of same-typed sources.
///
/// Finite iff every source is finite. Elements pass through untouched.
pub fn concat<S>(sources: S) -> Concat<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Concat {
        sources: sources.into_iter(),
        current: None,
    }
}

impl<S> Clone for Concat<S>
where
    S: Iterator + Clone,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
            current: self.current.clone(),
        }
    }
}

impl<S> fmt::Debug for Concat<S>
where
    S: Iterator + fmt::Debug,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .finish()
    }
}

impl<S> Iterator for Concat<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some(item);
                }
            }
            // Current source exhausted (or none opened yet): advance
            self.current = Some(self.sources.next()?.into_iter());
        }
    }
}

/// Two sources of different types yielding the same item, one after the other.
///
/// Built by [`append`].
#[derive(Debug, Clone)]
pub struct Append<A, B> {
    first: Option<A>,
    second: B,
}

/// Yield everything from `first`, then everything from `second`.
pub fn append<A, B>(first: A, second: B) -> Append<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Append {
        first: Some(first.into_iter()),
        second: second.into_iter(),
    }
}

impl<A, B> Iterator for Append<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = self.first.as_mut() {
            match first.next() {
                Some(item) => return Some(item),
                // Never touch the first source again
                None => self.first = None,
            }
        }
        self.second.next()
    }
}

impl<A, B> FusedIterator for Append<A, B>
where
    A: Iterator,
    B: FusedIterator<Item = A::Item>,
{
}

/// Concatenate any number of iterables sharing an item type.
///
/// Unlike [`concat`], the iterables may each have a different concrete type.
///
/// ```
/// use seqwrap::concat;
///
/// let all: Vec<i32> = concat!(vec![0, 1], [2, 3, 4, 5], 6..8).collect();
/// assert_eq!(all, [0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
#[macro_export]
macro_rules! concat {
    ($first:expr $(,)?) => {
        ::core::iter::IntoIterator::into_iter($first)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::generators::append($first, $crate::concat!($($rest),+))
    };
}
