//! Error types for transformed views.
//!
//! This module provides the error type returned by the strict view
//! operations (`lookup`, `set`, `delete`). The lenient operations (`get`,
//! `contains`, traversal) never fail; they normalize every failure into an
//! absent value or a skipped entry instead.

use static_assertions::assert_impl_all;

/// Represents a failure of a strict view operation.
///
/// A transformed view has exactly two ways to fail, and both are
/// programming/domain-mismatch signals rather than transient faults: no
/// operation ever retries.
///
/// # Examples
///
/// ```rust
/// use transmap::error::ViewError;
///
/// let error = ViewError::KeyNotFound;
/// assert_eq!(format!("{error}"), "key not found in the underlying mapping");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// A key or value has no valid translation in the requested direction.
    ///
    /// Raised when a backward transform declines an input during `set`. The
    /// view never validates transform outputs; it only reacts to the
    /// transform declining.
    NotRepresentable,
    /// A strict lookup or deletion was asked for a view key that does not
    /// resolve to an entry in the underlying mapping.
    ///
    /// A failed backward translation and a genuinely missing source key are
    /// reported identically through this variant.
    KeyNotFound,
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRepresentable => write!(
                formatter,
                "key or value has no representation on the other side of the view"
            ),
            Self::KeyNotFound => write!(formatter, "key not found in the underlying mapping"),
        }
    }
}

impl std::error::Error for ViewError {}

assert_impl_all!(ViewError: Send, Sync, Clone, Copy);
