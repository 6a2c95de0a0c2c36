//! Bounded repetition of a single value

use std::iter::FusedIterator;

/// Yields a clone of one value a fixed number of times.
///
/// Built by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    remaining: u64,
}

/// Repeat `value` exactly `count` times.
///
/// A zero or negative `count` gives an empty sequence.
pub fn repeat<T: Clone>(value: T, count: i64) -> Repeat<T> {
    Repeat {
        value,
        remaining: count.max(0) as u64,
    }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_repeat_value() {
        let foo: Vec<&str> = repeat("Foo", 5).collect();
        assert_eq!(foo, vec!["Foo"; 5]);
        let bar: Vec<String> = repeat(String::from("Bar"), 2).collect();
        assert_eq!(bar, vec!["Bar", "Bar"]);
    }

    #[test_case(0 ; "zero count")]
    #[test_case(-3 ; "negative count")]
    #[test_case(i64::MIN ; "minimum count")]
    fn test_repeat_non_positive_is_empty(count: i64) {
        assert_eq!(repeat("Goo", count).next(), None);
    }

    #[test]
    fn test_repeat_size_hint_is_exact() {
        let mut iter = repeat('x', 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }
}
