//! ## Bag Cursor
//! This module contains an explicit forward-only cursor over the backing vector of a
//! [crate::bag::Bag]. The cursor only borrows the elements, so any number of them can walk the
//! same bag independently.

use std::iter::FusedIterator;

use crate::error::ExhaustedIteratorError;

#[derive(Debug, Clone)]
pub struct BagCursor<'a, T> {
    vec: &'a [T],
    pos: usize,
}

impl<'a, T> BagCursor<'a, T> {
    pub(crate) fn new(vec: &'a [T]) -> Self {
        Self { vec, pos: 0 }
    }

    /// Whether another call to [BagCursor::next_item] will succeed.
    pub fn has_next(&self) -> bool {
        self.pos < self.vec.len()
    }

    /// Return the element under the cursor and advance by one.
    pub fn next_item(&mut self) -> Result<&'a T, ExhaustedIteratorError> {
        let item = self.vec.get(self.pos).ok_or(ExhaustedIteratorError)?;
        self.pos += 1;
        Ok(item)
    }
}

impl<'a, T> Iterator for BagCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.vec.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for BagCursor<'_, T> {}

// Once `pos` reaches the end it never moves again.
impl<T> FusedIterator for BagCursor<'_, T> {}
