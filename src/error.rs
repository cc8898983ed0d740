use thiserror::Error;

/// The error type for fallible `List` operations.
///
/// Indexed access is the only operation that reports a failure. The other
/// boundary conditions are accepted as silent no-ops by design: `insert`
/// with a position past the end of the list does nothing, and `pop_back`
/// on an empty list returns `None`. See the respective methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An indexed access was attempted at or past the end of the list.
    ///
    /// The index is *not* reduced modulo the ring length: an index equal
    /// to or greater than `len` fails instead of wrapping around to an
    /// earlier element.
    #[error("index {index} out of bounds in a ring of length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the access.
        len: usize,
    },
}

/// A specialized [`Result`](std::result::Result) type for list operations.
pub type Result<T> = std::result::Result<T, Error>;
