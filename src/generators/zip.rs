//! Lock-step iteration over several sources
//!
//! `zip` takes a tuple of sources with possibly different element types and
//! yields tuples. `zip_all` takes any number of same-typed sources and yields
//! one `Vec` per step. Both stop for good at the first exhausted source.

use std::iter::FusedIterator;

/// A tuple of iterables that can be zipped.
///
/// Implemented for tuples of arity 1 through 8.
pub trait ZipSources {
    /// Tuple of cursors, one per source
    type Cursors: ZipCursors;

    /// Open one cursor per source, in order.
    fn into_cursors(self) -> Self::Cursors;
}

/// A tuple of cursors pulled in lock step.
pub trait ZipCursors {
    /// Tuple with one element per cursor
    type Item;

    /// Pull one element from each cursor, left to right.
    ///
    /// Returns `None` as soon as any cursor is exhausted; elements already
    /// pulled for that step are dropped.
    fn pull(&mut self) -> Option<Self::Item>;
}

macro_rules! zip_tuple_impls {
    ($(($($S:ident $idx:tt),+))+) => {
        $(
            impl<$($S: IntoIterator),+> ZipSources for ($($S,)+) {
                type Cursors = ($($S::IntoIter,)+);

                fn into_cursors(self) -> Self::Cursors {
                    ($(self.$idx.into_iter(),)+)
                }
            }

            impl<$($S: Iterator),+> ZipCursors for ($($S,)+) {
                type Item = ($($S::Item,)+);

                fn pull(&mut self) -> Option<Self::Item> {
                    Some(($(self.$idx.next()?,)+))
                }
            }
        )+
    };
}

zip_tuple_impls! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

/// Heterogeneous lock-step iterator yielding tuples.
///
/// Built by [`zip`].
#[derive(Debug, Clone)]
pub struct Zip<C> {
    cursors: C,
    done: bool,
}

/// Zip same-position elements of each source into a tuple.
///
/// Similar to Python's `zip`: the shortest source wins.
///
/// ```
/// use seqwrap::generators::zip;
///
/// let rows: Vec<(i32, char, &str)> = zip((0..3, "ab".chars(), ["x", "y", "z"])).collect();
/// assert_eq!(rows, [(0, 'a', "x"), (1, 'b', "y")]);
/// ```
pub fn zip<S: ZipSources>(sources: S) -> Zip<S::Cursors> {
    Zip {
        cursors: sources.into_cursors(),
        done: false,
    }
}

impl<C: ZipCursors> Iterator for Zip<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        let row = self.cursors.pull();
        self.done = row.is_none();
        row
    }
}

impl<C: ZipCursors> FusedIterator for Zip<C> {}

/// Homogeneous lock-step iterator yielding one `Vec` per step.
///
/// Built by [`zip_all`].
#[derive(Debug, Clone)]
pub struct ZipAll<I> {
    cursors: Vec<I>,
    done: bool,
}

/// Zip any number of same-typed sources.
///
/// With no sources at all the result is empty.
pub fn zip_all<S>(sources: S) -> ZipAll<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let cursors: Vec<_> = sources.into_iter().map(IntoIterator::into_iter).collect();
    let done = cursors.is_empty();
    ZipAll { cursors, done }
}

impl<I: Iterator> Iterator for ZipAll<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        let mut row = Vec::with_capacity(self.cursors.len());
        for cursor in &mut self.cursors {
            match cursor.next() {
                Some(item) => row.push(item),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        Some(row)
    }
}

impl<I: Iterator> FusedIterator for ZipAll<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_zip_shortest_wins() {
        let rows: Vec<(i32, &str)> = zip((vec![1, 2, 3], vec!["a", "b"])).collect();
        assert_eq!(rows, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_zip_single_source() {
        let rows: Vec<(u8,)> = zip((vec![4u8, 5],)).collect();
        assert_eq!(rows, vec![(4,), (5,)]);
    }

    #[test]
    fn test_zip_stops_pulling_after_exhaustion() {
        let pulls = Cell::new(0);
        let counted = (0..10).inspect(|_| pulls.set(pulls.get() + 1));
        let mut iter = zip((counted, vec!['a']));
        assert_eq!(iter.next(), Some((0, 'a')));
        // Second step pulls 1 from the first source, then finds the second empty
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_zip_all_rows() {
        let rows: Vec<Vec<i32>> = zip_all(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]).collect();
        assert_eq!(rows, vec![vec![1, 4, 6], vec![2, 5, 7]]);
    }

    #[test]
    fn test_zip_all_without_sources_is_empty() {
        let sources: Vec<Vec<i32>> = Vec::new();
        assert_eq!(zip_all(sources).next(), None);
    }
}
