//! # Bag
//! This library contains a small generic bag collection: an unordered container that allows
//! duplicates, backed by a growable vector. The pieces are:
//! - [bag::Bag], the collection itself
//! - [cursor::BagCursor], an explicit forward-only cursor over a bag
//! - [container::Container], the interface a bag provides
//! - [error::ExhaustedIteratorError], returned when a cursor runs past the end

pub mod bag;
pub mod container;
pub mod cursor;
pub mod error;
