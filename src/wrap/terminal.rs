//! Eager terminal operations
//!
//! Each method consumes the wrapper and walks its source at most once, front
//! to back. Short-circuiting methods stop pulling as soon as the answer is
//! known; the rest drain the source completely.

use std::fmt::{Debug, Display, Write};
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use super::Wrap;
use crate::{Result, SequenceError};

/// Starting point of a [`Wrap::reduce`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed<T> {
    /// Seed with the first element and fold from the second
    Unseeded,
    /// Fold every element starting from this value
    Value(T),
}

impl<T> From<Option<T>> for Seed<T> {
    fn from(initial: Option<T>) -> Self {
        match initial {
            Some(value) => Seed::Value(value),
            None => Seed::Unseeded,
        }
    }
}

/// An element that can be split into a key/value pair.
///
/// Tuples and two-element arrays always can. A `Vec` can only when it holds
/// exactly two elements; anything else is rejected as
/// [`SequenceError::InvalidShape`].
pub trait MapEntry {
    /// Key half of the pair
    type Key;
    /// Value half of the pair
    type Value;

    /// Split into `(key, value)`.
    fn into_entry(self) -> Result<(Self::Key, Self::Value)>;
}

impl<K, V> MapEntry for (K, V) {
    type Key = K;
    type Value = V;

    fn into_entry(self) -> Result<(K, V)> {
        Ok(self)
    }
}

impl<T> MapEntry for [T; 2] {
    type Key = T;
    type Value = T;

    fn into_entry(self) -> Result<(T, T)> {
        let [key, value] = self;
        Ok((key, value))
    }
}

impl<T: Debug> MapEntry for Vec<T> {
    type Key = T;
    type Value = T;

    fn into_entry(self) -> Result<(T, T)> {
        let [key, value] = <[T; 2]>::try_from(self)
            .map_err(|rejected| SequenceError::invalid_shape("to_map", &rejected))?;
        Ok((key, value))
    }
}

impl<I: Iterator> Wrap<I> {
    /// Collect every element, in order.
    pub fn to_vec(self) -> Vec<I::Item> {
        let items: Vec<I::Item> = self.source.collect();
        trace!(operation = "to_vec", consumed = items.len());
        items
    }

    /// Build a map from elements that are themselves key/value pairs.
    ///
    /// Later duplicates overwrite earlier values but keep the key's original
    /// position. Fails on the first element that is not a pair.
    pub fn to_map(self) -> Result<IndexMap<<I::Item as MapEntry>::Key, <I::Item as MapEntry>::Value>>
    where
        I::Item: MapEntry,
        <I::Item as MapEntry>::Key: Hash + Eq,
    {
        let mut map = IndexMap::new();
        for (index, item) in self.source.enumerate() {
            let (key, value) = item.into_entry().map_err(|err| {
                debug!(operation = "to_map", index, error = %err, "rejected element");
                err
            })?;
            map.insert(key, value);
        }
        trace!(operation = "to_map", entries = map.len());
        Ok(map)
    }

    /// Build a map keyed by `key_selector`, holding the elements as values.
    pub fn to_map_by<K, F>(self, key_selector: F) -> IndexMap<K, I::Item>
    where
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
    {
        self.to_map_with(key_selector, |item| item)
    }

    /// Build a map with keys from `key_selector` and values from
    /// `value_selector`. Last write wins on key collision.
    pub fn to_map_with<K, V, F, G>(self, mut key_selector: F, mut value_selector: G) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
        G: FnMut(I::Item) -> V,
    {
        let mut map = IndexMap::new();
        for item in self.source {
            let key = key_selector(&item);
            map.insert(key, value_selector(item));
        }
        trace!(operation = "to_map_with", entries = map.len());
        map
    }

    /// Collect unique elements, keeping the first occurrence's position.
    pub fn to_set(self) -> IndexSet<I::Item>
    where
        I::Item: Hash + Eq,
    {
        let set: IndexSet<I::Item> = self.source.collect();
        trace!(operation = "to_set", unique = set.len());
        set
    }

    /// Whether every `(value, index)` satisfies `predicate`. True when empty.
    pub fn every<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        match self.position_of(|item, index| !predicate(item, index)) {
            Some(index) => {
                trace!(operation = "every", failed_at = index);
                false
            }
            None => true,
        }
    }

    /// Whether any `(value, index)` satisfies `predicate`. False when empty.
    pub fn some<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        self.find_index(predicate).is_some()
    }

    /// First element satisfying `predicate`.
    pub fn find<P>(self, mut predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        let found = self
            .source
            .enumerate()
            .find(|(index, item)| predicate(item, *index));
        if let Some((index, _)) = &found {
            trace!(operation = "find", matched_at = *index);
        }
        found.map(|(_, item)| item)
    }

    /// 0-based index of the first element satisfying `predicate`.
    pub fn find_index<P>(self, predicate: P) -> Option<usize>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        let index = self.position_of(predicate);
        if let Some(index) = index {
            trace!(operation = "find_index", matched_at = index);
        }
        index
    }

    /// 0-based index of the first element equal to `search`.
    pub fn index_of<T>(self, search: &T) -> Option<usize>
    where
        I::Item: PartialEq<T>,
        T: ?Sized,
    {
        self.find_index(|item, _| item == search)
    }

    /// Render every element with `Display`, separated by `separator`
    /// (`","` when `None`).
    pub fn join<'s>(self, separator: impl Into<Option<&'s str>>) -> String
    where
        I::Item: Display,
    {
        let separator = separator.into().unwrap_or(",");
        let mut out = String::new();
        let mut consumed = 0usize;
        for item in self.source {
            if consumed > 0 {
                out.push_str(separator);
            }
            // Writing into a `String` cannot fail
            let _ = write!(out, "{}", item);
            consumed += 1;
        }
        trace!(operation = "join", consumed);
        out
    }

    /// Fold left to right.
    ///
    /// The accumulator receives `(accumulated, element, step)` where `step`
    /// counts accumulator calls from 1. With [`Seed::Unseeded`] the first
    /// element is the starting value, and an empty sequence is an error.
    pub fn reduce<F>(self, accumulator: F, seed: Seed<I::Item>) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item, usize) -> I::Item,
    {
        let mut source = self.source;
        let initial = match seed {
            Seed::Value(value) => value,
            Seed::Unseeded => match source.next() {
                Some(first) => first,
                None => {
                    let err = SequenceError::EmptySequence { operation: "reduce" };
                    debug!(operation = "reduce", error = %err);
                    return Err(err);
                }
            },
        };
        Ok(Wrap { source }.fold_into(initial, accumulator))
    }

    /// Fold into a value of another type, starting from `initial`.
    ///
    /// Same step numbering as [`Wrap::reduce`]; never fails.
    pub fn fold_into<U, F>(self, initial: U, mut accumulator: F) -> U
    where
        F: FnMut(U, I::Item, usize) -> U,
    {
        let mut step = 0usize;
        let value = self.source.fold(initial, |acc, item| {
            step += 1;
            accumulator(acc, item, step)
        });
        trace!(operation = "fold", steps = step);
        value
    }

    fn position_of<P>(self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        self.source
            .enumerate()
            .find(|(index, item)| predicate(item, *index))
            .map(|(index, _)| index)
    }
}
