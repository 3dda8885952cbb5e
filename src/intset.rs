//! #   The IntSet.
//!
//! The `IntSet` is a set of integers, stored in a hash table with separate
//! chaining: each bucket holds the chain of the values hashing into it.
//!
//! ##  Under the covers.
//!
//! Under the covers the `IntSet` is an array of buckets, whose number follows
//! the load factor, that is the number of values per bucket:
//!
//! -   At a load factor of 0.75 or above, the number of buckets doubles.
//! -   At a load factor of 0.25 or below, the number of buckets halves, but
//!     never below the capacity requested at construction.
//!
//! The load factor is checked after every insertion or removal, and crossing a
//! threshold rehashes every value there and then. An insertion or removal is
//! therefore O(1) on average, but O(n) whenever it triggers a resize.
//!
//! #   Example: basic
//!
//! ```
//! use chainset::intset::IntSet;
//!
//! let mut set = IntSet::with_capacity(10);
//! set.insert(5);
//! set.insert(7);
//!
//! assert_eq!(2, set.len());
//! assert!(set.contains(5));
//! assert!(!set.contains(9));
//!
//! set.extend([11, 13]);
//!
//! assert_eq!(4, set.len());
//! assert_eq!("{ 13 5 7 11 } : 0.40", set.summarize());
//! ```
//!
//! #   Example: managing capacity
//!
//! ```
//! use chainset::failure::Failure;
//! use chainset::intset::IntSet;
//!
//! //  At least 1 bucket is necessary.
//! assert_eq!(Err(Failure::ZeroCapacity), IntSet::try_with_capacity(0));
//!
//! let mut set = IntSet::with_capacity(4);
//! set.extend([1, 2, 3]);
//!
//! //  3 values in 4 buckets: 0.75, time to grow.
//! assert_eq!(8, set.capacity());
//!
//! //  2 values in 8 buckets: 0.25, time to shrink.
//! set.discard(1);
//! assert_eq!(4, set.capacity());
//! ```
//!
//! #   Example: set algebra
//!
//! ```
//! use chainset::intset::IntSet;
//!
//! let mut odds = IntSet::with_capacity(10);
//! odds.extend([1, 3, 5]);
//!
//! let mut small = IntSet::with_capacity(10);
//! small.extend([1, 2, 3]);
//!
//! let union = odds.union(&small);
//! assert_eq!(4, union.len());
//!
//! let intersection = odds.intersection(&small);
//! assert!(intersection.is_subset(&odds));
//! assert!(intersection.is_proper_subset(&small));
//! assert!(!odds.is_disjoint(&small));
//! ```
//!
//! #   Example: copies and views
//!
//! Cloning an `IntSet` copies every value: the copy and the original are
//! independent. A read-only view, which borrows the set, is available too.
//!
//! ```
//! use chainset::intset::IntSet;
//!
//! let mut set = IntSet::with_capacity(10);
//! set.extend([1, 2, 3]);
//!
//! let mut copy = set.clone();
//! copy.discard(2);
//!
//! assert!(set.contains(2));
//! assert!(!copy.contains(2));
//!
//! let view = set.view();
//! assert_eq!(3, view.len());
//! assert!(view.is_superset(copy.view()));
//! ```

pub mod iterator;

mod algebra;
mod intset;
mod report;
mod view;

pub use self::intset::IntSet;
pub use self::report::{BucketTable, Summary};
pub use self::view::IntSetView;

pub use super::hashcore::capacity::{GROW_LOAD, SHRINK_LOAD};

use super::failure;
use super::hashcore;
use super::root;
use super::Value;
