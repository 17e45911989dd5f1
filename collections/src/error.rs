use derive_more::Display;

/// Errors returned by list operations.
///
/// Every failing operation leaves the list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[non_exhaustive]
pub enum Error {
    /// Index is not within the live elements of the list.
    #[display("index {index} is out of range for list of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,

        /// Length of the list at the time of the call.
        len: usize,
    },

    /// Sort was requested without an ordering function.
    #[display("comparator must be provided")]
    MissingComparator,
}

impl Error {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }
}
