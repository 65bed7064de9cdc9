/// Error type for the Remove module
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The supplied index set failed validation
    #[error("Invalid index set: {0}")]
    InvalidIndices(#[from] excise_common::error::Error),
}
