//! ## Bags
//! This module provides a basic mutable bag (multiset) implementation backed by a vector. The key
//! exported data structure is [Bag].
//!
//! Elements are kept in insertion order internally, so "the first occurrence" of a value is always
//! the earliest inserted element that is still present. Callers should not rely on any order
//! beyond that.

use std::slice;

use log::{debug, trace};

use crate::{container::Container, cursor::BagCursor};

/// Bags containing values of type `T`, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag<T> {
    vec: Vec<T>,
}

impl<T> Bag<T> {
    /// Create a new empty bag.
    pub fn new() -> Self {
        Self { vec: Vec::new() }
    }

    /// Create a new bag containing all elements from `vec`.
    pub fn of_vec(vec: Vec<T>) -> Self {
        Self { vec }
    }

    /// Put `item` at the end of the backing vector.
    pub fn add(&mut self, item: T) {
        self.vec.push(item);
        trace!("Bag add, len now {}", self.vec.len());
    }

    /// Compute how many elements are in the bag overall, including duplications, this is `O(1)`.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Check if the bag is empty, this is `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Obtain an explicit `has_next`/`next_item` cursor starting before the first element.
    pub fn cursor(&self) -> BagCursor<'_, T> {
        BagCursor::new(&self.vec)
    }

    /// Obtain an iterator over all elements in the bag.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }
}

impl<T: PartialEq> Bag<T> {
    /// Remove the first element equal to `item`, shifting the ones after it. Returns `false` and
    /// leaves the bag untouched if there is none. `O(n)`.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.vec.iter().position(|x| x == item) {
            Some(idx) => {
                self.vec.remove(idx);
                trace!("Bag remove at {idx}, len now {}", self.vec.len());
                true
            }
            None => {
                debug!("Bag remove found no match among {} elements", self.vec.len());
                false
            }
        }
    }

    /// Linear scan for an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.vec.contains(item)
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Container<T> for Bag<T> {
    type Cursor<'a>
        = BagCursor<'a, T>
    where
        T: 'a;

    fn add(&mut self, item: T) {
        Bag::add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        Bag::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        Bag::contains(self, item)
    }

    fn len(&self) -> usize {
        Bag::len(self)
    }

    fn is_empty(&self) -> bool {
        Bag::is_empty(self)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        Bag::cursor(self)
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            vec: FromIterator::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter)
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;

    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
