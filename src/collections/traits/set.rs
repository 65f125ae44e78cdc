use std::iter::{Chain, FusedIterator};

/// A collection of unique elements which supports membership testing.
///
/// Implementors only need to provide lookup, length and borrowed iteration, the set algebra is
/// derived from those. Every provided iterator borrows both sets and produces `&T`.
pub trait Set<T>: Sized {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the set contains an element equal to `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Creates an iterator over all items that are in `self` but not `other`. (`self \ other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Difference(Membership::new(self, other, false))
    }

    /// Creates an iterator over all items that are in `self` or `other` but not both. (`self △
    /// other`)
    fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference(
            Membership::new(self, other, false).chain(Membership::new(other, self, false)),
        )
    }

    /// Creates an iterator over all items that are in both `self` and `other`. (`self ∩ other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        // Iterating over the smaller set means fewer lookups in the larger one.
        if self.len() <= other.len() {
            Intersection(Membership::new(self, other, true))
        } else {
            Intersection(Membership::new(other, self, true))
        }
    }

    /// Creates an iterator over all items that are in either `self` or `other`. (`self ∪ other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union(self.iter().chain(Membership::new(other, self, false)))
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common.
    fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).next().is_none()
    }
}

/// Filters the elements of one set by whether they are members of another. All of the borrowed
/// set operations are built from this.
pub struct Membership<'a, S: Set<T>, T: 'a> {
    inner: S::Iter<'a>,
    other: &'a S,
    wanted: bool,
}

impl<'a, S: Set<T>, T: 'a> Membership<'a, S, T> {
    fn new(source: &'a S, other: &'a S, wanted: bool) -> Membership<'a, S, T> {
        Membership {
            inner: source.iter(),
            other,
            wanted,
        }
    }
}

impl<'a, S: Set<T>, T: 'a> Iterator for Membership<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (other, wanted) = (self.other, self.wanted);
        self.inner.find(|item| other.contains(item) == wanted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Membership<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{
}

/// A borrowed iterator over all items that are in one set but not another.
///
/// See [`Set::difference`].
pub struct Difference<'a, S: Set<T>, T: 'a>(Membership<'a, S, T>);

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{
}

/// A borrowed iterator over all items that are in exactly one of two sets.
///
/// See [`Set::symmetric_difference`].
pub struct SymmetricDifference<'a, S: Set<T>, T: 'a>(
    Chain<Membership<'a, S, T>, Membership<'a, S, T>>,
);

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for SymmetricDifference<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{
}

/// A borrowed iterator over all items that are in both of two sets.
///
/// See [`Set::intersection`].
pub struct Intersection<'a, S: Set<T>, T: 'a>(Membership<'a, S, T>);

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{
}

/// A borrowed iterator over all items that are in either of two sets, each produced once.
///
/// See [`Set::union`].
pub struct Union<'a, S: Set<T>, T: 'a>(Chain<S::Iter<'a>, Membership<'a, S, T>>);

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Union<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{
}
