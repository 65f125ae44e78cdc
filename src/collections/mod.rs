//! Collection types and the traits they share.
//!
//! # Purpose
//! [`hash`] holds the set itself. [`traits`] describes what it means to be a set independently of
//! the storage strategy, which is where the set algebra (union, intersection, etc.) lives.

pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
