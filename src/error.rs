//! ## Errors
//! The only failure in this crate: asking a [crate::cursor::BagCursor] for an element after it
//! has walked past the end of the bag.

use thiserror::Error;

/// Returned by [crate::cursor::BagCursor::next_item] once no elements remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no more elements in the bag")]
pub struct ExhaustedIteratorError;
