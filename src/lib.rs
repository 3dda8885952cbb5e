#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The ChainSet Library
//!
//! A resizable hash set of integers, with separate chaining.
//!
//! -   The `IntSet`: a set of `i64`, whose number of buckets follows its load factor.
//! -   The `IntSetView`: a read-only view of an `IntSet`, on which set algebra operates.
//!
//! Values are hashed into buckets by Fibonacci hashing, and colliding values are chained within their bucket.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod failure;
pub mod intset;

mod hashcore;
mod utils;

use self::utils::root;

/// The type of the values stored in an `IntSet`.
pub type Value = i64;
