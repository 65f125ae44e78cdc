//! Hash-based collections. At the moment that's only [`HashSet`], a set which resolves hash
//! collisions by chaining elements together in bins.

pub mod set;

#[doc(inline)]
pub use set::{ElementNotFound, HashSet};
