//! The set algebra.
//!
//! Operations never modify their operands: they either build a new `IntSet`,
//! or answer a question.
//!
//! All are implemented in terms of iteration over one operand and membership
//! tests against the other, hence cost O(|left| * average chain length of
//! right), plus the cost of the insertions for those building a new set.

use super::{IntSet, IntSetView};
use super::hashcore::capacity::NumberBuckets;

impl<'a> IntSetView<'a> {
    /// Returns a new `IntSet` holding the values in `self` or in `other`, or
    /// both.
    ///
    /// The result has `self.capacity() + other.capacity()` buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut left = IntSet::with_capacity(10);
    /// left.extend([1, 2, 3]);
    ///
    /// let mut right = IntSet::with_capacity(10);
    /// right.extend([1, 3, 4]);
    ///
    /// let union = left.view().union(right.view());
    ///
    /// assert_eq!(4, union.len());
    /// assert_eq!(20, union.min_capacity());
    /// ```
    pub fn union(&self, other: IntSetView<'_>) -> IntSet {
        let mut result = IntSet::with_buckets(self.sum_buckets(other));

        result.extend(self.iter());

        for value in other {
            if !result.contains(value) {
                result.insert(value);
            }
        }

        result
    }

    /// Returns a new `IntSet` holding the values both in `self` and in `other`.
    ///
    /// The result has as many buckets as the smallest of the two operands.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut left = IntSet::with_capacity(10);
    /// left.extend([1, 2, 3]);
    ///
    /// let mut right = IntSet::with_capacity(5);
    /// right.extend([1, 3, 4]);
    ///
    /// let intersection = left.view().intersection(right.view());
    ///
    /// assert_eq!(2, intersection.len());
    /// assert!(intersection.contains(1));
    /// assert!(intersection.contains(3));
    /// assert_eq!(5, intersection.min_capacity());
    /// ```
    pub fn intersection(&self, other: IntSetView<'_>) -> IntSet {
        let number_buckets = self.capacity().min(other.capacity());
        let mut result = IntSet::with_buckets(NumberBuckets(number_buckets));

        result.extend(self.iter().filter(|&value| other.contains(value)));

        result
    }

    /// Returns a new `IntSet` holding the values in `self` but not in `other`.
    ///
    /// The result has as many buckets as `self`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut left = IntSet::with_capacity(10);
    /// left.extend([1, 2, 3]);
    ///
    /// let mut right = IntSet::with_capacity(10);
    /// right.extend([1, 3, 4]);
    ///
    /// let difference = left.view().difference(right.view());
    ///
    /// assert_eq!(vec![2], difference.iter().collect::<Vec<_>>());
    /// ```
    pub fn difference(&self, other: IntSetView<'_>) -> IntSet {
        let mut result = IntSet::with_buckets(NumberBuckets(self.capacity()));

        result.extend(self.iter().filter(|&value| !other.contains(value)));

        result
    }

    /// Returns a new `IntSet` holding the values in either `self` or `other`,
    /// but not in both.
    ///
    /// The result has `self.capacity() + other.capacity()` buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut left = IntSet::with_capacity(10);
    /// left.extend([1, 2, 3]);
    ///
    /// let mut right = IntSet::with_capacity(10);
    /// right.extend([1, 3, 4]);
    ///
    /// let difference = left.view().symmetric_difference(right.view());
    ///
    /// assert_eq!(2, difference.len());
    /// assert!(difference.contains(2));
    /// assert!(difference.contains(4));
    /// ```
    pub fn symmetric_difference(&self, other: IntSetView<'_>) -> IntSet {
        let mut result = IntSet::with_buckets(self.sum_buckets(other));

        result.extend(self.iter().filter(|&value| !other.contains(value)));
        result.extend(other.iter().filter(|&value| !self.contains(value)));

        result
    }

    /// Returns `true` if `other` contains at least all the values of `self`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut odds = IntSet::with_capacity(10);
    /// odds.extend([1, 3, 5]);
    ///
    /// let mut one = IntSet::with_capacity(10);
    /// one.insert(1);
    ///
    /// assert!(one.view().is_subset(odds.view()));
    /// assert!(odds.view().is_subset(odds.view()));
    /// assert!(!odds.view().is_subset(one.view()));
    /// ```
    pub fn is_subset(&self, other: IntSetView<'_>) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if `other` contains all the values of `self`, and at
    /// least one more.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut odds = IntSet::with_capacity(10);
    /// odds.extend([1, 3, 5]);
    ///
    /// let mut one = IntSet::with_capacity(10);
    /// one.insert(1);
    ///
    /// assert!(one.view().is_proper_subset(odds.view()));
    /// assert!(!odds.view().is_proper_subset(odds.view()));
    /// ```
    pub fn is_proper_subset(&self, other: IntSetView<'_>) -> bool {
        if self.len() >= other.len() {
            return false;
        }

        self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if `self` contains at least all the values of `other`.
    pub fn is_superset(&self, other: IntSetView<'_>) -> bool {
        other.is_subset(*self)
    }

    /// Returns `true` if `self` contains all the values of `other`, and at
    /// least one more.
    pub fn is_proper_superset(&self, other: IntSetView<'_>) -> bool {
        other.is_proper_subset(*self)
    }

    /// Returns `true` if `self` is disjoint from `other`, i.e., their
    /// intersection is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut odds = IntSet::with_capacity(10);
    /// odds.extend([1, 3, 5]);
    ///
    /// let mut evens = IntSet::with_capacity(10);
    /// evens.extend([2, 4, 6]);
    ///
    /// assert!(odds.view().is_disjoint(evens.view()));
    /// assert!(!odds.view().is_disjoint(odds.view()));
    /// ```
    pub fn is_disjoint(&self, other: IntSetView<'_>) -> bool {
        !self.iter().any(|value| other.contains(value))
    }

    /// Returns `true` if `self` and `other` contain the same values,
    /// regardless of their number of buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut left = IntSet::with_capacity(10);
    /// left.extend([1, 2, 3]);
    ///
    /// let mut right = IntSet::with_capacity(3);
    /// right.extend([3, 2, 1]);
    ///
    /// assert!(left.view().is_equal(right.view()));
    /// ```
    pub fn is_equal(&self, other: IntSetView<'_>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        //  Same length, hence inclusion suffices.
        self.iter().all(|value| other.contains(value))
    }

    //  Returns the number of buckets of both operands, together.
    fn sum_buckets(&self, other: IntSetView<'_>) -> NumberBuckets {
        NumberBuckets(self.capacity().saturating_add(other.capacity()))
    }
}

impl<'a, 'b> PartialEq<IntSetView<'b>> for IntSetView<'a> {
    fn eq(&self, other: &IntSetView<'b>) -> bool { self.is_equal(*other) }
}

impl<'a> Eq for IntSetView<'a> {}

//
//  Convenience methods on IntSet, forwarding to its view.
//

impl IntSet {
    /// Returns a new `IntSet` holding the values in `self` or in `other`, or
    /// both.
    ///
    /// See `IntSetView::union`.
    pub fn union(&self, other: &IntSet) -> IntSet {
        self.view().union(other.view())
    }

    /// Returns a new `IntSet` holding the values both in `self` and in `other`.
    ///
    /// See `IntSetView::intersection`.
    pub fn intersection(&self, other: &IntSet) -> IntSet {
        self.view().intersection(other.view())
    }

    /// Returns a new `IntSet` holding the values in `self` but not in `other`.
    ///
    /// See `IntSetView::difference`.
    pub fn difference(&self, other: &IntSet) -> IntSet {
        self.view().difference(other.view())
    }

    /// Returns a new `IntSet` holding the values in either `self` or `other`,
    /// but not in both.
    ///
    /// See `IntSetView::symmetric_difference`.
    pub fn symmetric_difference(&self, other: &IntSet) -> IntSet {
        self.view().symmetric_difference(other.view())
    }

    /// Returns `true` if `other` contains at least all the values of `self`.
    pub fn is_subset(&self, other: &IntSet) -> bool {
        self.view().is_subset(other.view())
    }

    /// Returns `true` if `other` contains all the values of `self`, and at
    /// least one more.
    pub fn is_proper_subset(&self, other: &IntSet) -> bool {
        self.view().is_proper_subset(other.view())
    }

    /// Returns `true` if `self` contains at least all the values of `other`.
    pub fn is_superset(&self, other: &IntSet) -> bool {
        self.view().is_superset(other.view())
    }

    /// Returns `true` if `self` contains all the values of `other`, and at
    /// least one more.
    pub fn is_proper_superset(&self, other: &IntSet) -> bool {
        self.view().is_proper_superset(other.view())
    }

    /// Returns `true` if `self` and `other` have no value in common.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut a = IntSet::with_capacity(10);
    /// a.extend([5, 7, 11, 13]);
    ///
    /// let mut b = IntSet::with_capacity(10);
    /// b.extend([1, 3, 9, 15]);
    ///
    /// assert!(a.is_disjoint(&b));
    /// ```
    pub fn is_disjoint(&self, other: &IntSet) -> bool {
        self.view().is_disjoint(other.view())
    }

    /// Returns `true` if `self` and `other` contain the same values.
    ///
    /// This is also what `==` checks.
    pub fn is_equal(&self, other: &IntSet) -> bool {
        self.view().is_equal(other.view())
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &IntSet) -> bool { self.is_equal(other) }
}

impl Eq for IntSet {}

//  mod tests
