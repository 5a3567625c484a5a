//! ## Containers
//! The [Container] trait describes an unordered collection that can grow, shrink by value and be
//! walked with a cursor. [crate::bag::Bag] is the implementation shipped with this crate.

/// An unordered collection of `T` with membership tests based on `T`'s equality.
pub trait Container<T> {
    /// The cursor produced by [Container::cursor].
    type Cursor<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Put `item` into the container, this always succeeds.
    fn add(&mut self, item: T);

    /// Take out one element equal to `item`, returns whether there was one.
    fn remove(&mut self, item: &T) -> bool;

    fn contains(&self, item: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Obtain a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;
}
