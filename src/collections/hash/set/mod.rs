//! A module containing [`HashSet`] and associtated types.
//!
//! Other than the set itself, this module provides owned and borrowed iteration over a set's
//! elements and the error returned when removing an element that isn't present.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod bin;
mod error;
mod hash_set;
mod iter;

pub use error::*;
pub use hash_set::*;
pub use iter::*;

pub(crate) use bin::Bin;
