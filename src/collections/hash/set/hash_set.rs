use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use super::{Bin, ElementNotFound, Iter};
use crate::util::fmt::{DebugContents, write_set};

/// The capacity used when none is provided.
pub const DEFAULT_CAP: usize = 16;

/// The smallest capacity a HashSet will ever have, whether it is requested on construction or
/// reached by shrinking.
pub const MIN_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

// The set grows once len / cap exceeds 1/2.
const HIGH_WATERMARK_NUMERATOR: usize = 1;
const HIGH_WATERMARK_DENOMINATOR: usize = 2;

// The set shrinks once len / cap drops below 1/4.
const LOW_WATERMARK_NUMERATOR: usize = 1;
const LOW_WATERMARK_DENOMINATOR: usize = 4;

/// An unordered set of elements, which relies on the elements implementing [`Hash`] and [`Eq`].
///
/// Hash collisions are resolved via separate chaining: the table is a fixed number of bins, each
/// of which holds every element whose hash maps to that bin's index. The table doubles in size
/// once an insertion pushes the load factor above 1/2 and halves once a removal drops it below
/// 1/4, without ever going below [`MIN_CAP`].
///
/// It is a logic error for elements in a HashSet to be manipulated in a way that changes their
/// hash or equality. Because of this, HashSet's API prevents mutable access to its elements. It is
/// also a logic error for two equal elements to produce different hashes.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `remove` | `O(1)`**, `O(n)` |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
/// | `retain` | `O(n)` |
///
/// \* Lookups scan the chain in a single bin, so a poor hash function will increase the time
/// taken, without affecting correctness.
///
/// \** If the operation crosses a watermark, the whole table is rehashed in `O(n)`. \* applies as
/// well.
///
/// \*** If the HashSet has enough capacity for the additional items already, `reserve` is `O(1)`.
#[derive(Clone)]
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) table: Box<[Bin<T>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet with a capacity of [`DEFAULT_CAP`].
    pub fn new() -> HashSet<T> {
        HashSet::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty HashSet with the provided `cap`acity (or [`MIN_CAP`] if that is
    /// larger).
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet::with_cap_and_hasher(cap, RandomState::new())
    }

    /// Creates a HashSet from the elements of `seq`, with a capacity of `cap` or twice the number
    /// of elements in `seq`, whichever is larger. Duplicates in `seq` are collapsed.
    pub fn from_seq<I: IntoIterator<Item = T>>(seq: I, cap: usize) -> HashSet<T> {
        HashSet::from_seq_with_hasher(seq, cap, RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new, empty HashSet with a capacity of [`DEFAULT_CAP`] and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new, empty HashSet with the provided `cap`acity (or [`MIN_CAP`] if that is
    /// larger) and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            table: empty_table(cmp::max(cap, MIN_CAP)),
            len: 0,
            hasher,
        }
    }

    /// Creates a HashSet from the elements of `seq` using the provided `hasher`. See
    /// [`HashSet::from_seq`].
    pub fn from_seq_with_hasher<I: IntoIterator<Item = T>>(
        seq: I,
        cap: usize,
        hasher: B,
    ) -> HashSet<T, B> {
        // The length of an arbitrary iterator isn't known until it has been consumed.
        let seq: Vec<T> = seq.into_iter().collect();
        let mut set = HashSet::with_cap_and_hasher(
            cmp::max(cap, seq.len().saturating_mul(GROWTH_FACTOR)),
            hasher,
        );

        for item in seq {
            set.insert(item);
        }

        set
    }

    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the HashSet, as a number of bins.
    pub fn cap(&self) -> usize {
        self.table.len()
    }

    /// Returns the ratio of elements to bins.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Returns a reference to the HashSet's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Adds `item` to the HashSet, returning true if it wasn't already present. If an equal
    /// element is already present, the set is left unchanged and `item` is dropped.
    ///
    /// # Panics
    /// Panics if growing the HashSet would overflow its capacity.
    pub fn insert(&mut self, item: T) -> bool {
        let index = self.bucket_index(&item);
        let bin = &mut self.table[index];

        if bin.position(&item).is_some() {
            return false;
        }

        bin.push(item);
        self.len += 1;

        // Growing after the count update means the watermark holds for the new length.
        if self.should_grow() {
            self.grow();
        }

        true
    }

    /// Removes the element equal to `item` from the HashSet, returning the stored element. If no
    /// such element exists, `item` is handed back as part of the [`ElementNotFound`] error and the
    /// set is left unchanged.
    pub fn remove(&mut self, item: T) -> Result<T, ElementNotFound<T>> {
        match self.take(&item) {
            Some(removed) => Ok(removed),
            None => Err(ElementNotFound::new(item)),
        }
    }

    /// Removes and returns the element equal to `item`, or None if there is no such element.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(item);
        let bin = &mut self.table[index];

        let position = bin.position(item)?;
        let removed = bin.remove_at(position);
        self.len -= 1;

        self.shrink();

        Some(removed)
    }

    /// Returns true if the HashSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Returns a reference to the stored element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of T
        // where equality and hashing carries over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table[self.bucket_index(item)].find(item)
    }

    /// Increases the capacity of the HashSet to ensure that len + `extra` elements will fit
    /// without growing.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    pub fn reserve(&mut self, extra: usize) {
        let required = self.len.saturating_add(extra);

        let mut new_cap = self.cap();
        while above_high_watermark(required, new_cap) {
            new_cap = grown_cap(new_cap);
        }

        if new_cap != self.cap() {
            self.resize(new_cap);
        }
    }

    /// Retains only the elements for which `f` returns true, shrinking the HashSet afterwards if
    /// enough elements were removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        // If `f` panics, the guard still brings len back in line with the bins.
        let mut guard = RecountOnDrop(&mut *self);
        for bin in guard.0.table.iter_mut() {
            bin.retain(&mut f);
        }
        drop(guard);

        self.shrink();
    }

    /// Removes all elements from the HashSet, returning it to [`MIN_CAP`].
    pub fn clear(&mut self) {
        self.table = empty_table(MIN_CAP);
        self.len = 0;
    }

    /// Returns an iterator over all elements in the HashSet, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Calculates the index of the bin that `item` belongs in. Equal elements always produce the
    /// same index for a given capacity.
    pub(crate) fn bucket_index<Q: Hash + ?Sized>(&self, item: &Q) -> usize {
        let item_hash = self.hasher.hash_one(item);
        // UNCHECKED: The capacity never drops below MIN_CAP, so it is never 0.
        (item_hash % self.cap() as u64) as usize
    }

    /// Determines whether the HashSet's length has crossed the high watermark.
    pub(crate) fn should_grow(&self) -> bool {
        above_high_watermark(self.len, self.cap())
    }

    /// Grows the HashSet by the growth factor.
    pub(crate) fn grow(&mut self) {
        self.resize(grown_cap(self.cap()))
    }

    /// Halves the capacity until the length is back above the low watermark or the capacity
    /// reaches [`MIN_CAP`], then rehashes once for the final capacity.
    pub(crate) fn shrink(&mut self) {
        let mut new_cap = self.cap();
        while new_cap > MIN_CAP && below_low_watermark(self.len, new_cap) {
            new_cap = cmp::max(new_cap / GROWTH_FACTOR, MIN_CAP);
        }

        if new_cap != self.cap() {
            self.resize(new_cap);
        }
    }

    /// Replaces the table with one of `new_cap` empty bins and moves every element into the bin
    /// it belongs to under the new capacity.
    pub(crate) fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= MIN_CAP, "HashSet resized below its minimum capacity!");

        #[cfg(feature = "trace")]
        tracing::trace!(from = self.cap(), to = new_cap, len = self.len, "rehashing HashSet");

        // Replace the table first so that we can consume the old one.
        let old_table = mem::replace(&mut self.table, empty_table(new_cap));

        for item in old_table.into_vec().into_iter().flatten() {
            let index = self.bucket_index(&item);
            self.table[index].push(item);
        }

        debug_assert_eq!(
            self.len,
            self.table.iter().map(Bin::len).sum::<usize>(),
            "HashSet lost or gained elements while rehashing!"
        );
    }
}

/// Recounts the elements of a HashSet when dropped, including while unwinding.
struct RecountOnDrop<'a, T: Hash + Eq, B: BuildHasher>(&'a mut HashSet<T, B>);

impl<'a, T: Hash + Eq, B: BuildHasher> Drop for RecountOnDrop<'a, T, B> {
    fn drop(&mut self) {
        self.0.len = self.0.table.iter().map(Bin::len).sum();
    }
}

fn empty_table<T>(cap: usize) -> Box<[Bin<T>]> {
    iter::repeat_with(Bin::new).take(cap).collect()
}

const fn above_high_watermark(len: usize, cap: usize) -> bool {
    len.saturating_mul(HIGH_WATERMARK_DENOMINATOR) > cap.saturating_mul(HIGH_WATERMARK_NUMERATOR)
}

const fn below_low_watermark(len: usize, cap: usize) -> bool {
    len.saturating_mul(LOW_WATERMARK_DENOMINATOR) < cap.saturating_mul(LOW_WATERMARK_NUMERATOR)
}

fn grown_cap(cap: usize) -> usize {
    match cap.checked_mul(GROWTH_FACTOR) {
        Some(new_cap) => new_cap,
        None => panic!("Capacity overflow!"),
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        HashSet::from_seq_with_hasher(iter, DEFAULT_CAP, B::default())
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        HashSet::from_seq(value, DEFAULT_CAP)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // No reserve up front: duplicates in `iter` would leave the table oversized.
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugContents(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_set(f, self.iter(), |f, item| write!(f, "{item}"))
    }
}

#[cfg(feature = "traits")]
impl<T: Hash + Eq, B: BuildHasher> crate::collections::traits::Set<T> for HashSet<T, B> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}
