//! Endless repetition of a restartable source

/// Repeats its source in order, forever.
///
/// Built by [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I> {
    origin: I,
    current: I,
}

/// Iterate cyclically over `iterable`.
///
/// The source must be restartable, so its iterator has to be `Clone`; each
/// lap starts from a fresh clone of the original cursor.
///
/// An empty source never yields and `next` never returns: it keeps
/// restarting the empty source. Callers must not cycle something empty.
pub fn cycle<S>(iterable: S) -> Cycle<S::IntoIter>
where
    S: IntoIterator,
    S::IntoIter: Clone,
{
    let origin = iterable.into_iter();
    Cycle {
        current: origin.clone(),
        origin,
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(item);
            }
            self.current = self.origin.clone();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_around() {
        for (i, value) in cycle([0, 1, 2]).take(101).enumerate() {
            assert_eq!(value, i % 3);
        }
    }

    #[test]
    fn test_cycle_over_borrowed_collection() {
        let source = vec!["a", "b"];
        let out: Vec<&&str> = cycle(&source).take(5).collect();
        assert_eq!(out, [&"a", &"b", &"a", &"b", &"a"]);
        // Source is untouched
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_cycle_single_element() {
        assert!(cycle(Some(7)).take(10).all(|v| v == 7));
    }
}
