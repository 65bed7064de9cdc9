/// Per-element retain flags for a single compaction pass.
#[derive(Debug)]
pub(crate) struct KeepMask {
    keep: Vec<bool>,
}

impl KeepMask {
    /// Builds a mask of `len` entries with every position in `indices` cleared.
    ///
    /// Clearing is idempotent, so repeated indices and any ordering are fine.
    ///
    /// # Panics
    ///
    /// Panics if an index is not less than `len`.
    pub(crate) fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut keep = vec![true; len];
        for index in indices {
            assert!(index < len, "removal index (is {index}) should be < len (is {len})");
            keep[index] = false;
        }

        Self { keep }
    }

    /// Moves every kept element of `seq` to the front, in order, and returns
    /// the number of kept elements. Dropped elements end up past that point.
    pub(crate) fn compact<T>(&self, seq: &mut [T]) -> usize {
        debug_assert_eq!(self.keep.len(), seq.len());

        let mut write = 0;
        for (read, &keep) in self.keep.iter().enumerate() {
            if !keep {
                continue;
            }
            // everything in [write, read) has been dropped or already moved
            if read != write {
                seq.swap(write, read);
            }
            write += 1;
        }

        write
    }
}
