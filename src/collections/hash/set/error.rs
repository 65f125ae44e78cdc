use std::error::Error;
use std::fmt::Debug;

use derive_more::Display;

/// The error returned by [`HashSet::remove`](super::HashSet::remove) when the set contains no
/// element equal to the one provided. The element is handed back to the caller.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("Element {element:?} not found in HashSet!")]
pub struct ElementNotFound<T> {
    pub element: T,
}

impl<T> ElementNotFound<T> {
    pub const fn new(element: T) -> ElementNotFound<T> {
        ElementNotFound { element }
    }

    /// Consumes the error, returning the element that couldn't be found.
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T: Debug> Error for ElementNotFound<T> {}
