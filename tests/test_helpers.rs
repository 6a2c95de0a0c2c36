//! Test helper functions for observing how sequences are pulled

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Shared pull counter handed out alongside a counted source
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Number of elements pulled so far
    pub fn pulls(&self) -> usize {
        self.0.get()
    }
}

/// Wrap `source` so every element pulled from it bumps the returned counter
pub fn counted<I>(source: I) -> (impl Iterator<Item = I::Item> + Clone, PullCounter)
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let counter = PullCounter::default();
    let cell = Rc::clone(&counter.0);
    let iter = source.into_iter().inspect(move |_| cell.set(cell.get() + 1));
    (iter, counter)
}
