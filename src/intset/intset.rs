//! The IntSet

use super::root::{fmt, iter};

use super::IntSetView;
use super::failure::{panic_from_failure, Result};
use super::hashcore::capacity::{Capacity, NumberBuckets, Size};
use super::hashcore::chains::Chains;
use super::hashcore::hash;
use super::iterator::{Buckets, Values};
use super::Value;

//
//  Public Interface
//

/// `IntSet`
///
/// A set of integers, hashed into a resizable array of buckets.
///
/// Cloning an `IntSet` is a deep copy: the clone owns its own buckets and
/// values, and is unaffected by mutations of the original, and vice-versa.
#[derive(Clone)]
pub struct IntSet {
    //  Number of buckets, and floor below which it does not shrink.
    capacity: Capacity,
    //  The number of values in the set, that is of nodes reachable from
    //  `chains`.
    length: usize,
    chains: Chains,
}

impl IntSet {
    /// Creates a new instance of the `IntSet` with `capacity` buckets.
    ///
    /// The number of buckets never shrinks below `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `capacity` is 0.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::failure::Failure;
    /// #   use chainset::intset::IntSet;
    /// let set = IntSet::try_with_capacity(10).unwrap();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(10, set.capacity());
    /// assert_eq!(10, set.min_capacity());
    ///
    /// assert_eq!(Err(Failure::ZeroCapacity), IntSet::try_with_capacity(0));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let capacity = Capacity::new(capacity)?;

        Ok(Self::with_buckets(capacity.current()))
    }

    /// Creates a new instance of the `IntSet` with `capacity` buckets.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is 0.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let set = IntSet::with_capacity(10);
    ///
    /// assert!(set.is_empty());
    /// assert_eq!(10, set.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(set) => set,
            Err(failure) => panic_from_failure(failure),
        }
    }

    //  Creates a new instance with `number_buckets` buckets, at least 1.
    pub(crate) fn with_buckets(number_buckets: NumberBuckets) -> Self {
        Self {
            capacity: Capacity::with_buckets(number_buckets),
            length: 0,
            chains: Chains::new(number_buckets),
        }
    }

    /// Creates an `IntSetView`.
    ///
    /// An `IntSetView` is a read-only view of the `IntSet` instance it is
    /// created from; the instance cannot be modified while the view exists.
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
    /// assert_eq!(1, view.len());
    /// ```
    pub fn view(&self) -> IntSetView<'_> {
        IntSetView::new(&self.chains, self.capacity, Size(self.length))
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.length }

    /// Returns the current number of buckets of the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(2);
    /// assert_eq!(2, set.capacity());
    ///
    /// set.extend([1, 2]);
    /// assert_eq!(4, set.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.capacity.current().0 }

    /// Returns the number of buckets below which the instance never shrinks,
    /// that is the capacity it was created with.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(2);
    /// set.extend([1, 2]);
    ///
    /// assert_eq!(4, set.capacity());
    /// assert_eq!(2, set.min_capacity());
    /// ```
    pub fn min_capacity(&self) -> usize { self.capacity.floor().0 }

    /// Returns the load factor of the instance, that is the number of elements
    /// divided by the number of buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.extend([1, 2, 3, 4]);
    ///
    /// assert_eq!(0.4, set.load_factor());
    /// ```
    pub fn load_factor(&self) -> f64 { self.view().load_factor() }

    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.insert(-1);
    ///
    /// assert!(set.contains(-1));
    /// assert!(!set.contains(1));
    /// ```
    pub fn contains(&self, value: Value) -> bool { self.view().contains(value) }

    /// Returns an iterator over the values of the set.
    ///
    /// The values are yielded bucket after bucket, and within a bucket from
    /// the most to the least recently inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.extend([5, 7, 11, 13]);
    ///
    /// let values: Vec<_> = set.iter().collect();
    /// assert_eq!(vec![13, 5, 7, 11], values);
    /// ```
    pub fn iter(&self) -> Values<'_> { self.chains.values() }

    /// Returns an iterator over the chains of the buckets of the set.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.extend([5, 7, 11, 13]);
    ///
    /// let first: Vec<_> = set.buckets().next().unwrap().collect();
    /// assert_eq!(vec![13, 5], first);
    /// assert_eq!(10, set.buckets().count());
    /// ```
    pub fn buckets(&self) -> Buckets<'_> { self.chains.buckets() }

    /// Inserts a value into the set.
    ///
    /// Returns `true` if the value was inserted, and `false` if it was already
    /// present, in which case the set is left untouched.
    ///
    /// An insertion may grow the set, rehashing every value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    ///
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, value: Value) -> bool {
        let bucket = hash::bucket_of(value, self.capacity.current());

        if self.chains.contains(bucket, value) {
            log::trace!("insert {}: already present in bucket {}", value, bucket.0);
            return false;
        }

        self.chains.push_front(bucket, value);
        self.length += 1;

        log::trace!("insert {}: linked in bucket {}", value, bucket.0);

        self.resize();
        true
    }

    /// Removes a value from the set.
    ///
    /// Returns `true` if the value was removed, and `false` if it was absent.
    ///
    /// The load factor is checked in either case, hence a removal may shrink
    /// the set, rehashing every value, even when the value was absent.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.insert(3);
    ///
    /// assert!(set.discard(3));
    /// assert!(!set.discard(3));
    ///
    /// assert!(set.is_empty());
    /// ```
    pub fn discard(&mut self, value: Value) -> bool {
        let bucket = hash::bucket_of(value, self.capacity.current());

        let removed = self.chains.unlink(bucket, value);

        if removed {
            self.length -= 1;
        }

        log::trace!("discard {}: {} in bucket {}",
            value, if removed { "unlinked" } else { "absent" }, bucket.0);

        self.resize();
        removed
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its current number of
    /// buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(2);
    /// set.extend([1, 2, 3]);
    /// assert_eq!(8, set.capacity());
    ///
    /// set.clear();
    /// assert_eq!(0, set.len());
    /// assert_eq!(8, set.capacity());
    /// ```
    pub fn clear(&mut self) {
        log::debug!("clear: dropping {} values from {} buckets",
            self.length, self.capacity.current().0);

        self.chains.clear();
        self.length = 0;
    }

    /// Destroys the instance, releasing its buckets and values.
    ///
    /// This is equivalent to dropping the instance; as it is consumed, it
    /// cannot be used afterwards.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.insert(1);
    ///
    /// set.destroy();
    /// ```
    pub fn destroy(self) {
        log::debug!("destroy: dropping {} values from {} buckets",
            self.length, self.capacity.current().0);
    }

    /// Returns a deep copy of the instance.
    ///
    /// This is equivalent to `clone`, and exists to be explicit at call sites
    /// where the copy is later modified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// set.insert(1);
    ///
    /// let mut copy = set.deep_copy();
    /// copy.insert(2);
    ///
    /// assert_eq!(1, set.len());
    /// assert_eq!(2, copy.len());
    /// ```
    pub fn deep_copy(&self) -> Self { self.clone() }

    //  Resizes the buckets, if the load factor crossed a threshold.
    //
    //  Every value is rehashed into new chains, in bucket order.
    fn resize(&mut self) {
        let size = Size(self.length);

        let Some(target) = self.capacity.resize_target(size) else {
            return;
        };

        log::debug!("resize: {} values from {} to {} buckets",
            self.length, self.capacity.current().0, target.0);

        let mut chains = Chains::new(target);

        for value in self.chains.values() {
            chains.push_front(hash::bucket_of(value, target), value);
        }

        self.chains = chains;
        self.capacity = self.capacity.resized(target);
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.view().debug("IntSet", f)
    }
}

impl iter::Extend<Value> for IntSet {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = Value>
    {
        for value in collection {
            self.insert(value);
        }
    }
}

impl<'a> iter::Extend<&'a Value> for IntSet {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = &'a Value>
    {
        for value in collection {
            self.insert(*value);
        }
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = Value;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> { self.iter() }
}

#[cfg(test)]
mod tests {

use std::collections::HashSet as StdHashSet;

use proptest::prelude::*;

use crate::failure::Failure;

use super::{hash, IntSet, NumberBuckets, Value};

//  Checks the invariants of the set, and returns its values.
fn check(set: &IntSet) -> StdHashSet<Value> {
    let values: StdHashSet<_> = set.iter().collect();

    assert_eq!(set.len(), set.chains.reachable());
    assert_eq!(set.len(), values.len(), "duplicate value in {:?}", set);
    assert_eq!(set.capacity(), set.chains.number_buckets().0);
    assert!(set.capacity() >= set.min_capacity());

    for (index, chain) in set.buckets().enumerate() {
        for value in chain {
            let bucket = hash::bucket_of(value, NumberBuckets(set.capacity()));
            assert_eq!(index, bucket.0, "{} in wrong bucket", value);
        }
    }

    values
}

#[test]
fn with_capacity_zero() {
    assert_eq!(Err(Failure::ZeroCapacity), IntSet::try_with_capacity(0).map(|s| s.len()));
}

#[test]
#[should_panic(expected = "capacity must be at least 1 bucket")]
fn with_capacity_zero_panics() {
    IntSet::with_capacity(0);
}

#[test]
fn with_capacity_one() {
    let mut set = IntSet::with_capacity(1);

    set.insert(42);

    assert!(set.contains(42));
    assert_eq!(2, set.capacity());
    check(&set);
}

#[test]
fn insert_contains() {
    let mut set = IntSet::with_capacity(10);
    set.extend([5, 7, 11, 13]);

    assert_eq!(4, set.len());
    assert!(set.contains(5));
    assert!(!set.contains(9));
    check(&set);
}

#[test]
fn insert_idempotent() {
    let mut set = IntSet::with_capacity(10);

    assert!(set.insert(5));
    assert!(!set.insert(5));

    assert_eq!(1, set.len());
    assert!(set.contains(5));
    check(&set);
}

#[test]
fn insert_negative() {
    let mut set = IntSet::with_capacity(10);
    set.extend([-1, -5, -13, i64::MIN, i64::MAX]);

    for value in [-1, -5, -13, i64::MIN, i64::MAX] {
        assert!(set.contains(value), "{}", value);
    }
    assert!(!set.contains(1));
    assert!(!set.contains(-2));

    assert!(set.discard(-5));
    assert!(!set.contains(-5));
    assert_eq!(4, set.len());
    check(&set);
}

#[test]
fn insert_grows() {
    let mut set = IntSet::with_capacity(10);

    for value in 0..12 {
        set.insert(value);
    }

    //  Grew at the 8th value, to 20 buckets.
    assert_eq!(20, set.capacity());
    assert_eq!(10, set.min_capacity());
    assert_eq!(12, set.len());
    assert_eq!((0..12).collect::<StdHashSet<_>>(), check(&set));
}

#[test]
fn discard_shrinks() {
    let mut set = IntSet::with_capacity(10);
    set.extend(0..16);

    //  Grew at the 8th value to 20, and at the 15th to 40.
    assert_eq!(40, set.capacity());

    //  10 values in 40 buckets: 0.25.
    for value in 0..6 {
        set.discard(value);
    }
    assert_eq!(20, set.capacity());

    //  5 values in 20 buckets: 0.25.
    for value in 6..11 {
        set.discard(value);
    }
    assert_eq!(10, set.capacity());

    //  Never below the floor.
    for value in 11..16 {
        set.discard(value);
    }
    assert_eq!(10, set.capacity());
    assert!(set.is_empty());
    check(&set);
}

#[test]
fn discard_absent_still_shrinks() {
    let mut set = IntSet::with_capacity(2);
    set.extend([1, 2, 3]);
    assert_eq!(8, set.capacity());

    set.clear();
    assert_eq!(8, set.capacity());

    assert!(!set.discard(1));
    assert_eq!(4, set.capacity());
}

#[test]
fn insert_present_does_not_resize() {
    let mut set = IntSet::with_capacity(2);
    set.extend([1, 2, 3]);
    set.clear();

    //  1 value in 8 buckets: shrinks to 4 buckets, still at 0.25.
    set.insert(1);
    assert_eq!(4, set.capacity());

    assert!(!set.insert(1));
    assert_eq!(4, set.capacity());

    assert!(!set.discard(99));
    assert_eq!(2, set.capacity());
    check(&set);
}

#[test]
fn clear() {
    let mut set = IntSet::with_capacity(2);
    set.extend([1, 2, 3]);

    set.clear();

    assert!(set.is_empty());
    assert_eq!(8, set.capacity());
    assert!(!set.contains(1));
    check(&set);

    set.insert(4);
    assert!(set.contains(4));
    check(&set);
}

#[test]
fn deep_copy_is_independent() {
    let mut set = IntSet::with_capacity(10);
    set.extend([1, 2, 3]);

    let mut copy = set.deep_copy();
    copy.discard(1);
    copy.insert(4);
    set.insert(5);

    assert_eq!([1, 2, 3, 5].into_iter().collect::<StdHashSet<_>>(), check(&set));
    assert_eq!([2, 3, 4].into_iter().collect::<StdHashSet<_>>(), check(&copy));
}

#[test]
fn iter_bucket_order() {
    let mut set = IntSet::with_capacity(10);
    set.extend(&[5, 7, 11, 13]);

    assert_eq!(vec![13, 5, 7, 11], set.iter().collect::<Vec<_>>());
    assert_eq!(vec![13, 5, 7, 11], (&set).into_iter().collect::<Vec<_>>());
}

#[test]
fn trait_debug() {
    let mut set = IntSet::with_capacity(4);
    set.extend([5, 7]);

    //  frac(0.618 * 5) * 4 = 0.36, frac(0.618 * 7) * 4 = 1.30.
    assert_eq!("IntSet { capacity: 4, length: 2, buckets: [[5], [7], [], []] }", format!("{:?}", set));
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Value),
    Discard(Value),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (-64i64..64).prop_map(Op::Insert),
        6 => (-64i64..64).prop_map(Op::Discard),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matches_model(
        capacity in 1usize..16,
        ops in proptest::collection::vec(op_strategy(), 0..256),
    ) {
        let mut set = IntSet::with_capacity(capacity);
        let mut model: StdHashSet<Value> = StdHashSet::new();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    prop_assert_eq!(model.insert(value), set.insert(value));
                    prop_assert!(set.contains(value));
                },
                Op::Discard(value) => {
                    prop_assert_eq!(model.remove(&value), set.discard(value));
                    prop_assert!(!set.contains(value));
                },
                Op::Clear => {
                    model.clear();
                    set.clear();
                },
            }

            prop_assert_eq!(model.len(), set.len());
            prop_assert!(set.capacity() >= capacity);
        }

        prop_assert_eq!(model, check(&set));
        prop_assert_eq!(capacity, set.min_capacity());
    }
}

}   //  mod tests
