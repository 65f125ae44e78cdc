use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::{slice, vec};

use super::{Bin, HashSet};

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            bins: self.table.into_vec().into_iter(),
            chain: Default::default(),
        }
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T> {
    pub(crate) bins: vec::IntoIter<Bin<T>>,
    pub(crate) chain: vec::IntoIter<T>,
    pub(crate) remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.next() {
                self.remaining -= 1;
                return Some(item);
            }
            // Move on to the next bin, or stop once the table is exhausted.
            self.chain = self.bins.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            remaining: self.len,
            bins: self.table.iter(),
            chain: Default::default(),
        }
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`.
///
/// Elements are produced bin by bin, in the order that they sit within each chain. That order
/// depends on the hasher and the history of the set, so it shouldn't be relied upon.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T> {
    pub(crate) bins: slice::Iter<'a, Bin<T>>,
    pub(crate) chain: slice::Iter<'a, T>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.next() {
                self.remaining -= 1;
                return Some(item);
            }
            self.chain = self.bins.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// Derived Clone would require T: Clone.
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            bins: self.bins.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}
