use excise_common::{error::Error as IndexError, utils::iter::validate_indices};
use tracing::trace;

use crate::{core::mask::KeepMask, error::Error};

/// Removes the element at `index` by shifting everything after it one slot
/// toward the front.
///
/// The removed element ends up in the last slot of `seq`. Returns the new
/// logical end, which is always `seq.len() - 1`.
///
/// ```
/// use excise_remove::remove_one;
///
/// let mut seq = vec![10, 20, 30, 40, 50];
/// let new_end = remove_one(&mut seq, 2);
/// seq.truncate(new_end);
///
/// assert_eq!(seq, vec![10, 20, 40, 50]);
/// ```
///
/// # Panics
///
/// Panics if `index >= seq.len()`. Use [`try_remove_one`] to get an error instead.
pub fn remove_one<T>(seq: &mut [T], index: usize) -> usize {
    let len = seq.len();
    assert!(index < len, "removal index (is {index}) should be < len (is {len})");

    seq[index..].rotate_left(1);
    len - 1
}

/// Removes the elements at every position in `indices`, preserving the order
/// of the elements that are kept.
///
/// The positions are documented as ascending and unique, but any order works
/// and repeated positions are removed once. Runs in `O(n)` time with an `O(n)`
/// keep mask that lives for the duration of the call. Returns the new logical
/// end; the slots past it hold the removed elements in unspecified order.
///
/// ```
/// use excise_remove::remove_many;
///
/// let mut seq = vec!['a', 'b', 'c', 'd', 'e'];
/// let new_end = remove_many(&mut seq, [1, 3]);
///
/// assert_eq!(&seq[..new_end], &['a', 'c', 'e']);
/// ```
///
/// # Panics
///
/// Panics if any index is not less than `seq.len()`, before any element is
/// moved. Use [`try_remove_many`] to get an error instead.
pub fn remove_many<T>(seq: &mut [T], indices: impl IntoIterator<Item = usize>) -> usize {
    let mut indices = indices.into_iter().peekable();
    if indices.peek().is_none() {
        return seq.len();
    }

    let mask = KeepMask::from_indices(seq.len(), indices);
    let new_end = mask.compact(seq);

    trace!("compacted {} elements down to {}", seq.len(), new_end);
    new_end
}

/// Bounds-checked [`remove_one`].
///
/// Returns [`Error::InvalidIndices`] and leaves `seq` untouched when `index` is
/// out of range.
pub fn try_remove_one<T>(seq: &mut [T], index: usize) -> Result<usize, Error> {
    if index >= seq.len() {
        return Err(IndexError::IndexOutOfBounds { index, len: seq.len() }.into());
    }

    Ok(remove_one(seq, index))
}

/// Checked [`remove_many`].
///
/// `indices` must be strictly ascending and in bounds. When they are not,
/// [`Error::InvalidIndices`] is returned and `seq` is left untouched.
pub fn try_remove_many<T>(seq: &mut [T], indices: &[usize]) -> Result<usize, Error> {
    validate_indices(seq.len(), indices.iter().copied(), true)?;

    Ok(remove_many(seq, indices.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_one_middle() {
        let mut seq = vec![10, 20, 30, 40, 50];

        let new_end = remove_one(&mut seq, 2);

        assert_eq!(new_end, 4);
        assert_eq!(&seq[..new_end], &[10, 20, 40, 50]);
        assert_eq!(seq[4], 30);
    }

    #[test]
    fn test_remove_one_first_and_last() {
        let mut seq = vec![1, 2, 3];
        assert_eq!(remove_one(&mut seq, 0), 2);
        assert_eq!(&seq[..2], &[2, 3]);

        let mut seq = vec![1, 2, 3];
        assert_eq!(remove_one(&mut seq, 2), 2);
        assert_eq!(&seq[..2], &[1, 2]);
    }

    #[test]
    fn test_remove_one_single_element() {
        let mut seq = vec!["x"];
        assert_eq!(remove_one(&mut seq, 0), 0);
    }

    #[test]
    #[should_panic(expected = "removal index (is 3) should be < len (is 3)")]
    fn test_remove_one_out_of_bounds_panics() {
        let mut seq = vec![1, 2, 3];
        let _ = remove_one(&mut seq, 3);
    }

    #[test]
    fn test_remove_many_basic() {
        let mut seq = vec!['a', 'b', 'c', 'd', 'e'];

        let new_end = remove_many(&mut seq, vec![1, 3]);

        assert_eq!(new_end, 3);
        assert_eq!(&seq[..new_end], &['a', 'c', 'e']);
    }

    #[test]
    fn test_remove_many_empty_indices() {
        let mut seq = vec![1, 2, 3];

        let new_end = remove_many(&mut seq, vec![]);

        assert_eq!(new_end, 3);
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_many_empty_sequence() {
        let mut seq: Vec<u8> = vec![];
        assert_eq!(remove_many(&mut seq, vec![]), 0);
    }

    #[test]
    fn test_remove_many_all() {
        let mut seq = vec!['x'];
        assert_eq!(remove_many(&mut seq, vec![0]), 0);

        let mut seq = vec![1, 2, 3, 4];
        assert_eq!(remove_many(&mut seq, 0..4), 0);
    }

    #[test]
    fn test_remove_many_any_order_and_duplicates() {
        let mut sorted = vec![0, 1, 2, 3, 4, 5, 6];
        let mut shuffled = sorted.clone();

        let a = remove_many(&mut sorted, vec![1, 4, 5]);
        let b = remove_many(&mut shuffled, vec![5, 1, 4, 1, 5]);

        assert_eq!(a, 4);
        assert_eq!(&sorted[..a], &shuffled[..b]);
    }

    #[test]
    fn test_remove_many_non_copy_elements() {
        let mut seq: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();

        let new_end = remove_many(&mut seq, vec![0]);
        seq.truncate(new_end);

        assert_eq!(seq, vec!["two".to_string(), "three".to_string()]);
    }

    #[test]
    #[should_panic(expected = "removal index (is 5) should be < len (is 2)")]
    fn test_remove_many_out_of_bounds_panics() {
        let mut seq = vec![1, 2];
        let _ = remove_many(&mut seq, vec![5]);
    }

    #[test]
    fn test_try_remove_one() {
        let mut seq = vec![1, 2, 3];
        assert_eq!(try_remove_one(&mut seq, 1), Ok(2));
        assert_eq!(&seq[..2], &[1, 3]);
    }

    #[test]
    fn test_try_remove_one_out_of_bounds() {
        let mut seq: Vec<u32> = vec![];
        assert_eq!(
            try_remove_one(&mut seq, 0),
            Err(Error::InvalidIndices(IndexError::IndexOutOfBounds { index: 0, len: 0 }))
        );
    }

    #[test]
    fn test_try_remove_many_leaves_sequence_on_error() {
        let mut seq = vec![1, 2, 3, 4];

        let result = try_remove_many(&mut seq, &[0, 2, 2]);

        assert_eq!(result, Err(Error::InvalidIndices(IndexError::DuplicateIndex { index: 2 })));
        assert_eq!(seq, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_try_remove_many_rejects_unsorted() {
        let mut seq = vec![1, 2, 3, 4];
        assert!(matches!(
            try_remove_many(&mut seq, &[3, 1]),
            Err(Error::InvalidIndices(IndexError::UnsortedIndices { .. }))
        ));
    }

    #[test]
    fn test_try_remove_many() {
        let mut seq = vec![1, 2, 3, 4];
        assert_eq!(try_remove_many(&mut seq, &[0, 3]), Ok(2));
        assert_eq!(&seq[..2], &[2, 3]);
    }
}
