//! This crate is a single collection: an unordered [`HashSet`](collections::hash::HashSet) that
//! resolves collisions with separate chaining.
//!
//! # Purpose
//! Open addressing gets most of the attention, but chaining is the version of a hash table that
//! most people learn first, and it's worth having a careful implementation of it. Every bin is a
//! small chain of elements which share a bucket index, lookups are a hash followed by a linear
//! scan and the table resizes itself to keep those scans short.
//!
//! # Method
//! The set keeps its load factor (`len / cap`) between two watermarks:
//! - Once an insertion pushes the load factor above 1/2, the table doubles in size.
//! - Once a removal drops the load factor below 1/4, the table halves in size, but never below a
//!   small floor so that tiny sets don't thrash between two capacities.
//!
//! Both directions rehash every element into a freshly allocated table, which keeps insertion and
//! removal at amortized `O(1)`.
//!
//! # Error Handling
//! Only one operation can fail in a way that callers are expected to handle: removing an element
//! that isn't in the set. [`HashSet::remove`](collections::hash::HashSet::remove) returns an
//! [`ElementNotFound`](collections::hash::ElementNotFound) which hands the element back. Every
//! other method is total. Broken internal invariants are bugs, so they are checked with debug
//! assertions rather than surfaced as errors.
//!
//! # Dependencies
//! `derive_more` removes some very repetitive formatting code from the error types. With the
//! `trace` feature (on by default), resizes are reported through `tracing` so that they can be
//! observed without a debugger.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::hash::{ElementNotFound, HashSet};
