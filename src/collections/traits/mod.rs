//! Traits which describe collections independently of how they store their elements.

pub mod set;

#[doc(inline)]
pub use set::Set;
