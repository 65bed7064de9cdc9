/// Iterator and index-set utilities.
pub mod iter;
