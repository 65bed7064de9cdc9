mod compact;
mod ext;
mod mask;
mod runs;

use std::time::Instant;

use excise_common::utils::iter::{is_sorted_unique, sorted_unique, validate_indices};
use tracing::{debug, warn};

use crate::{
    error::Error,
    interfaces::{RemoveArgs, Strategy, Validation},
};

pub use compact::{remove_many, remove_one, try_remove_many, try_remove_one};
pub use ext::RemoveAtExt;
pub use runs::remove_sorted;

/// Removes the elements at `indices` from `seq` according to `args`
///
/// The index set is first checked as requested by `args.validation`; on failure
/// `seq` is left untouched. The sequence is then compacted with
/// `args.strategy` and truncated to its new length.
///
/// # Arguments
///
/// * `seq` - The vector to remove elements from
/// * `indices` - The positions to remove
/// * `args` - Arguments selecting the strategy and validation level
///
/// # Returns
///
/// The new length of `seq`
///
/// # Panics
///
/// With [`Validation::Unchecked`], panics if any index is out of bounds.
pub fn remove<T>(seq: &mut Vec<T>, indices: &[usize], args: RemoveArgs) -> Result<usize, Error> {
    let start_time = Instant::now();
    let len = seq.len();

    match args.validation {
        Validation::Unchecked => {}
        Validation::Bounds => {
            validate_indices(len, indices.iter().copied(), false)?;
        }
        Validation::Strict => {
            validate_indices(len, indices.iter().copied(), true)?;
        }
    }
    debug!("checked {} indices ({:?}) against {} elements", indices.len(), args.validation, len);

    let new_end = match args.strategy {
        Strategy::Mask => remove_many(seq, indices.iter().copied()),
        Strategy::SortedRuns if is_sorted_unique(indices) => remove_sorted(seq, indices),
        Strategy::SortedRuns => {
            warn!("indices are not sorted and unique, normalizing before compaction");
            remove_sorted(seq, &sorted_unique(indices.iter().copied()))
        }
    };
    seq.truncate(new_end);

    debug!(
        "removed {} of {} elements with {:?} strategy, took {:?}",
        len - new_end,
        len,
        args.strategy,
        start_time.elapsed()
    );
    Ok(new_end)
}
