use std::borrow::Borrow;
use std::slice;
use std::vec;

/// A chain of elements which share a bucket index within a [`HashSet`](super::HashSet).
///
/// A Bin doesn't know anything about hashing, it only provides a sequence with lookup by
/// equality. The set is responsible for making sure that no equal elements are pushed twice.
#[derive(Debug, Clone)]
pub(crate) struct Bin<T>(Vec<T>);

impl<T> Bin<T> {
    pub(crate) const fn new() -> Bin<T> {
        Bin(Vec::new())
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the position of the element equal to `item` within this chain.
    pub(crate) fn position<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.0.iter().position(|existing| existing.borrow() == item)
    }

    pub(crate) fn find<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.0.iter().find(|existing| (*existing).borrow() == item)
    }

    /// Appends `item` to the end of the chain. It is the responsibility of the caller to check
    /// that an equal element isn't already present.
    pub(crate) fn push(&mut self, item: T) {
        self.0.push(item)
    }

    /// Removes the element at `index`, keeping the rest of the chain in order.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        self.0.remove(index)
    }

    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.0.retain(f)
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> Default for Bin<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Bin<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
