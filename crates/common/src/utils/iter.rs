use tracing::trace;

use crate::error::Error;

/// Removes elements at specified indices from a collection.
///
/// This function takes a collection and a sorted list of indices, and builds a
/// new collection from the elements whose positions are not listed. Duplicate
/// indices are skipped over.
///
/// # Arguments
///
/// * `v` - The collection to remove elements from
/// * `indices` - A sorted list of indices to remove
///
/// # Returns
///
/// * `Vec<T>` - A new collection with the elements at the specified indices removed
pub fn remove_sorted_indices<T>(
    v: impl IntoIterator<Item = T>,
    indices: impl IntoIterator<Item = usize>,
) -> Vec<T> {
    let v = v.into_iter();
    let mut indices = indices.into_iter().peekable();
    if indices.peek().is_none() {
        return v.collect();
    }
    let (min, max) = v.size_hint();
    let mut result = Vec::with_capacity(max.unwrap_or(min));

    for (j, x) in v.enumerate() {
        // drop repeated indices left behind the cursor
        while indices.next_if(|&i| i < j).is_some() {}

        if indices.next_if_eq(&j).is_none() {
            result.push(x);
        }
    }

    result
}

/// Checks an index set against a sequence of length `len`.
///
/// Every index must be strictly less than `len`. When `strict` is set, the
/// indices must also be strictly ascending, which rules out duplicates.
///
/// # Arguments
///
/// * `len` - The length of the sequence the indices refer to
/// * `indices` - The index set to check
/// * `strict` - Whether to require strictly ascending order
///
/// # Returns
///
/// * `Result<usize, Error>` - The number of indices on success
pub fn validate_indices(
    len: usize,
    indices: impl IntoIterator<Item = usize>,
    strict: bool,
) -> Result<usize, Error> {
    let mut previous: Option<usize> = None;
    let mut count = 0;

    for (position, index) in indices.into_iter().enumerate() {
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }

        if strict {
            match previous {
                Some(prev) if prev == index => return Err(Error::DuplicateIndex { index }),
                Some(prev) if prev > index => {
                    return Err(Error::UnsortedIndices { position, previous: prev, current: index })
                }
                _ => {}
            }
        }

        previous = Some(index);
        count += 1;
    }

    trace!("validated {} indices against length {}", count, len);
    Ok(count)
}

/// Returns `true` if `indices` is strictly ascending.
pub fn is_sorted_unique(indices: &[usize]) -> bool {
    indices.windows(2).all(|pair| pair[0] < pair[1])
}

/// Sorts and deduplicates an arbitrary index collection.
///
/// ```
/// use excise_common::utils::iter::sorted_unique;
///
/// assert_eq!(sorted_unique(vec![3, 1, 3, 0]), vec![0, 1, 3]);
/// ```
pub fn sorted_unique(indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut indices: Vec<usize> = indices.into_iter().collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}
