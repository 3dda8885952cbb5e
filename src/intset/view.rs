//! A View of the IntSet.
//!
//! The View is a read-only borrow of an IntSet: it shares the buckets of the
//! set, rather than copying them, and therefore prevents any modification of
//! the set for as long as it lives.

use super::root::fmt;

use super::hashcore::capacity::{Capacity, Size};
use super::hashcore::chains::Chains;
use super::hashcore::hash;
use super::iterator::{Buckets, Values};
use super::Value;

/// `IntSetView`
///
/// A `IntSetView` is a read-only view of the `IntSet` it is created from.
///
/// It is `Copy`, and the set algebra operates on views, so that the operands
/// of an operation are never modified by it.
///
/// #   Iteration order
///
/// Values are iterated on bucket after bucket, and within a bucket from the
/// most to the least recently inserted. The order is therefore stable for a
/// given sequence of insertions and removals, but neither sorted, nor the
/// order of insertion.
#[derive(Clone, Copy)]
pub struct IntSetView<'a> {
    chains: &'a Chains,
    capacity: Capacity,
    size: Size,
}

impl<'a> IntSetView<'a> {
    //  Creates a new instance.
    pub(crate) fn new(chains: &'a Chains, capacity: Capacity, size: Size) -> Self {
        debug_assert!(chains.number_buckets() == capacity.current());

        Self { chains, capacity, size }
    }

    /// Returns whether the `IntSet` contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// assert!(set.view().is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.view().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.size.0 == 0 }

    /// Returns the number of elements contained in the `IntSet`.
    pub fn len(&self) -> usize { self.size.0 }

    /// Returns the current number of buckets of the `IntSet`.
    pub fn capacity(&self) -> usize { self.capacity.current().0 }

    /// Returns the number of buckets below which the `IntSet` never shrinks.
    pub fn min_capacity(&self) -> usize { self.capacity.floor().0 }

    /// Returns the load factor of the `IntSet`.
    pub fn load_factor(&self) -> f64 { self.capacity.load_factor(self.size) }

    /// Returns `true` if the set contains the value.
    ///
    /// The cost is proportional to the length of the chain the value hashes
    /// into.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.insert(1);
    ///
    /// let view = set.view();
    /// assert!(view.contains(1));
    /// assert!(!view.contains(0));
    /// ```
    pub fn contains(&self, value: Value) -> bool {
        let bucket = hash::bucket_of(value, self.capacity.current());
        self.chains.contains(bucket, value)
    }

    /// Returns an iterator over the values of the set.
    pub fn iter(&self) -> Values<'a> { self.chains.values() }

    /// Returns an iterator over the chains of the buckets of the set.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.extend([5, 7, 11, 13]);
    ///
    /// let lengths: Vec<_> = set.view().buckets().map(|chain| chain.count()).collect();
    /// assert_eq!(vec![2, 0, 0, 1, 0, 0, 0, 1, 0, 0], lengths);
    /// ```
    pub fn buckets(&self) -> Buckets<'a> { self.chains.buckets() }

    //  Formats the view, under the given name.
    pub(crate) fn debug(&self, name: &str, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct(name)
            .field("capacity", &self.capacity())
            .field("length", &self.len())
            .field("buckets", self.chains)
            .finish()
    }
}

impl<'a> fmt::Debug for IntSetView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.debug("IntSetView", f)
    }
}

impl<'a> IntoIterator for IntSetView<'a> {
    type Item = Value;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> { self.iter() }
}

#[cfg(test)]
mod tests {

use super::super::IntSet;

#[test]
fn view_reflects_set() {
    let mut set = IntSet::with_capacity(10);
    set.extend([5, 7, 11, 13]);

    let view = set.view();

    assert_eq!(4, view.len());
    assert_eq!(10, view.capacity());
    assert_eq!(10, view.min_capacity());
    assert_eq!(0.4, view.load_factor());
    assert!(view.contains(13));
    assert!(!view.contains(9));
    assert_eq!(vec![13, 5, 7, 11], view.into_iter().collect::<Vec<_>>());
}

#[test]
fn view_is_copy() {
    let mut set = IntSet::with_capacity(10);
    set.insert(1);

    let view = set.view();
    let other = view;

    assert_eq!(view.len(), other.len());
    assert_eq!(view.iter().collect::<Vec<_>>(), other.iter().collect::<Vec<_>>());
}

#[test]
fn trait_debug() {
    let mut set = IntSet::with_capacity(2);
    set.insert(5);

    assert_eq!("IntSetView { capacity: 2, length: 1, buckets: [[5], []] }", format!("{:?}", set.view()));
}

}   //  mod tests
