use crate::core::{remove_many, remove_one, remove_sorted};

/// Extension trait for `Vec` that compacts and truncates in one step.
///
/// Each method returns the new length of the vector.
pub trait RemoveAtExt {
    /// Removes the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn remove_at(&mut self, index: usize) -> usize;

    /// Removes the elements at every position in `indices`, in any order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    fn remove_at_many(&mut self, indices: impl IntoIterator<Item = usize>) -> usize;

    /// Removes the elements at `indices`, which must be sorted and unique.
    ///
    /// # Panics
    ///
    /// Panics if the last index is out of bounds.
    fn remove_at_sorted(&mut self, indices: &[usize]) -> usize;
}

impl<T> RemoveAtExt for Vec<T> {
    fn remove_at(&mut self, index: usize) -> usize {
        let new_end = remove_one(self, index);
        self.truncate(new_end);
        new_end
    }

    fn remove_at_many(&mut self, indices: impl IntoIterator<Item = usize>) -> usize {
        let new_end = remove_many(self, indices);
        self.truncate(new_end);
        new_end
    }

    fn remove_at_sorted(&mut self, indices: &[usize]) -> usize {
        let new_end = remove_sorted(self, indices);
        self.truncate(new_end);
        new_end
    }
}
