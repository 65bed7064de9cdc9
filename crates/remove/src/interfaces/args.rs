use derive_builder::Builder;

/// The algorithm used to compact the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Build a keep mask over the whole sequence, then make a single pass.
    /// Accepts indices in any order, duplicates included.
    #[default]
    Mask,
    /// Move the chunks of kept elements between runs of removed indices.
    /// Needs no mask, but the indices must be sorted and unique; they are
    /// normalized first when they are not.
    SortedRuns,
}

/// How strictly the index set is checked before compacting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// No checks. An out-of-range index panics.
    Unchecked,
    /// Every index must be in bounds.
    Bounds,
    /// Every index must be in bounds and the set must be strictly ascending.
    #[default]
    Strict,
}

/// Arguments for the remove operation
#[derive(Debug, Clone, Default, Builder)]
pub struct RemoveArgs {
    /// The compaction algorithm to use.
    pub strategy: Strategy,

    /// The checks to run on the index set before any element is moved.
    pub validation: Validation,
}

impl RemoveArgsBuilder {
    /// Creates a builder pre-filled with the default arguments.
    pub fn new() -> Self {
        Self { strategy: Some(Strategy::Mask), validation: Some(Validation::Strict) }
    }
}
