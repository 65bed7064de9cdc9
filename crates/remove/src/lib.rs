//! The Remove module compacts a sequence in place by dropping the elements at
//! a given set of positions.
//!
//! Surviving elements keep their relative order and are moved to the front of
//! the sequence. Every compaction routine returns the new logical end of the
//! sequence; the slots past it hold the removed elements and are left for the
//! caller to truncate. [`RemoveAtExt`] and [`remove`] do the truncation for
//! `Vec`s.

/// Error types for the remove module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use crate::core::{
    remove, remove_many, remove_one, remove_sorted, try_remove_many, try_remove_one, RemoveAtExt,
};
pub use error::Error;
pub use interfaces::{RemoveArgs, RemoveArgsBuilder, Strategy, Validation};
