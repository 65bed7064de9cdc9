/// Error type for index-set validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index points past the end of the sequence
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// The length of the sequence the index was checked against
        len: usize,
    },
    /// An index is smaller than the one before it
    #[error("indices are not ascending: {current} follows {previous} at position {position}")]
    UnsortedIndices {
        /// Position of the offending entry within the index set
        position: usize,
        /// The entry preceding the offending one
        previous: usize,
        /// The offending entry
        current: usize,
    },
    /// The same index appears more than once
    #[error("index {index} appears more than once")]
    DuplicateIndex {
        /// The repeated index
        index: usize,
    },
}
