//! The IntSet capacity.
//!
//! Apart from holding the number of buckets, decides when the buckets should
//! be grown or shrunk.

use super::root::cmp;

use super::failure::{Failure, Result};

/// Load factor at, or above, which the number of buckets doubles.
pub const GROW_LOAD: f64 = 0.75;

/// Load factor at, or below, which the number of buckets halves, down to the
/// number of buckets requested at construction.
pub const SHRINK_LOAD: f64 = 0.25;

/// The index of a Bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketIndex(pub usize);

/// The number of Buckets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NumberBuckets(pub usize);

/// The number of elements in all Buckets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

//  Capacity.
//
//  A building block for computations related to the number of buckets.
//
//  Invariant: `current >= floor >= 1`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity {
    //  The number of buckets requested at construction, never shrunk below.
    floor: NumberBuckets,
    //  The number of buckets currently allocated.
    current: NumberBuckets,
}

impl Capacity {
    //  Creates an instance with `number_buckets` buckets, which is also the
    //  floor below which the instance never shrinks.
    pub fn new(number_buckets: usize) -> Result<Self> {
        if number_buckets == 0 {
            return Err(Failure::ZeroCapacity);
        }

        Ok(Self::with_buckets(NumberBuckets(number_buckets)))
    }

    //  Creates an instance with `number_buckets` buckets.
    //
    //  The caller guarantees that `number_buckets` is at least 1.
    pub fn with_buckets(number_buckets: NumberBuckets) -> Self {
        debug_assert!(number_buckets.0 >= 1);

        Self { floor: number_buckets, current: number_buckets }
    }

    //  Returns the number of buckets below which the instance never shrinks.
    pub fn floor(self) -> NumberBuckets { self.floor }

    //  Returns the number of buckets currently allocated.
    pub fn current(self) -> NumberBuckets { self.current }

    //  Returns the load factor, for `size` elements.
    pub fn load_factor(self, size: Size) -> f64 {
        size.0 as f64 / self.current.0 as f64
    }

    //  Returns the number of buckets to resize to, if any, for `size` elements.
    //
    //  Evaluated after every mutation, hence a mutation costs O(size) whenever
    //  a threshold is crossed.
    pub fn resize_target(self, size: Size) -> Option<NumberBuckets> {
        let load = self.load_factor(size);

        if load >= GROW_LOAD {
            let grown = self.current.0.saturating_mul(2);
            (grown != self.current.0).then_some(NumberBuckets(grown))
        } else if load <= SHRINK_LOAD && self.current > self.floor {
            Some(NumberBuckets(cmp::max(self.floor.0, self.current.0 / 2)))
        } else {
            None
        }
    }

    //  Returns a copy of the instance with `current` buckets, retaining the floor.
    pub fn resized(self, current: NumberBuckets) -> Self {
        debug_assert!(current >= self.floor);

        Self { floor: self.floor, current }
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn capacity_new_zero() {
    assert_eq!(Err(Failure::ZeroCapacity), Capacity::new(0));
}

#[test]
fn capacity_new() {
    let capacity = Capacity::new(10).unwrap();

    assert_eq!(NumberBuckets(10), capacity.floor());
    assert_eq!(NumberBuckets(10), capacity.current());
}

#[test]
fn capacity_load_factor() {
    let capacity = Capacity::new(10).unwrap();

    assert_eq!(0.0, capacity.load_factor(Size(0)));
    assert_eq!(0.4, capacity.load_factor(Size(4)));
    assert_eq!(1.5, capacity.load_factor(Size(15)));
}

#[test]
fn capacity_resize_target_grow() {
    fn target(buckets: usize, size: usize) -> Option<usize> {
        let capacity = Capacity::new(buckets).unwrap();
        capacity.resize_target(Size(size)).map(|n| n.0)
    }

    assert_eq!(None, target(10, 7));
    assert_eq!(Some(20), target(10, 8));
    assert_eq!(Some(8), target(4, 3));
    assert_eq!(Some(2), target(1, 1));
}

#[test]
fn capacity_resize_target_shrink() {
    fn target(floor: usize, current: usize, size: usize) -> Option<usize> {
        let capacity = Capacity::new(floor).unwrap()
            .resized(NumberBuckets(current));
        capacity.resize_target(Size(size)).map(|n| n.0)
    }

    //  Never below the floor.
    assert_eq!(None, target(10, 10, 0));
    assert_eq!(None, target(10, 10, 2));

    //  Halves, at 25% load or below.
    assert_eq!(Some(10), target(10, 20, 5));
    assert_eq!(None, target(10, 20, 6));
    assert_eq!(Some(20), target(10, 40, 10));
    assert_eq!(Some(20), target(10, 40, 0));

    //  Halving would go below the floor.
    assert_eq!(Some(12), target(12, 20, 0));
}

#[test]
fn capacity_resize_target_saturates() {
    let capacity = Capacity::new(1).unwrap()
        .resized(NumberBuckets(usize::MAX));

    assert_eq!(None, capacity.resize_target(Size(usize::MAX)));
}

}   //  mod tests
