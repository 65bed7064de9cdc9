use excise_common::utils::iter::is_sorted_unique;

/// Removes the elements at `indices` without allocating a keep mask.
///
/// `indices` must be sorted and unique. They are walked as runs of adjacent
/// positions; the chunk of kept elements after each run is moved down to the
/// write cursor, which starts at the first removed position since nothing
/// before it moves. Returns the new logical end, with the same result as
/// [`remove_many`](crate::remove_many) for the same input.
///
/// ```
/// use excise_remove::remove_sorted;
///
/// let mut seq = vec![0, 1, 2, 3, 4, 5, 6, 7];
/// let new_end = remove_sorted(&mut seq, &[1, 2, 5]);
///
/// assert_eq!(&seq[..new_end], &[0, 3, 4, 6, 7]);
/// ```
///
/// # Panics
///
/// Panics if the last index is not less than `seq.len()`. Unsorted or repeated
/// indices trip a debug assertion and produce an unspecified result in release
/// builds.
pub fn remove_sorted<T>(seq: &mut [T], indices: &[usize]) -> usize {
    let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
        return seq.len();
    };
    let len = seq.len();
    assert!(last < len, "removal index (is {last}) should be < len (is {len})");
    debug_assert!(is_sorted_unique(indices), "removal indices must be sorted and unique");

    let mut destination = first;
    let mut run_start = 0;
    while run_start < indices.len() {
        // find the end of this run of adjacent indices
        let mut run_end = run_start + 1;
        while run_end < indices.len() && indices[run_end] == indices[run_end - 1] + 1 {
            run_end += 1;
        }

        // the kept chunk sits between this run and the next one
        let source_first = indices[run_end - 1] + 1;
        let source_last = indices.get(run_end).copied().unwrap_or(len);
        for source in source_first..source_last {
            seq.swap(destination, source);
            destination += 1;
        }

        run_start = run_end;
    }

    destination
}
