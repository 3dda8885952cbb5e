//! A variety of iterators over IntSet.
//!
//! The most obvious iterator is of course `Values`, which yields all values
//! in bucket order.
//!
//! `Buckets` yields the `Chain` of each bucket, which in turn yields the
//! values of this bucket from the most to the least recently inserted.

pub use super::hashcore::chains::{Buckets, Chain, Values};
