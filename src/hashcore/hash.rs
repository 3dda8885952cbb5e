//! Fibonacci hashing of values into buckets.
//!
//! The index of the bucket of `value` amongst `n` buckets is
//! `floor(n * frac(φ * value))`, where `φ` is the golden ratio conjugate.
//!
//! Multiplying by an irrational number spreads consecutive values evenly, so
//! that the number of buckets need not be prime, nor a power of 2.
//!
//! The fractional part of a negative product is negative, so the raw index is
//! brought back within `[0, n)` by an euclidean remainder.

use super::capacity::{BucketIndex, NumberBuckets};
use super::Value;

/// The golden ratio conjugate, `(√5 - 1) / 2`.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

//  Returns the index of the bucket `value` belongs to.
//
//  The result is always strictly less than `number_buckets`, which must be at
//  least 1.
pub fn bucket_of(value: Value, number_buckets: NumberBuckets) -> BucketIndex {
    debug_assert!(number_buckets.0 >= 1);

    let product = GOLDEN_RATIO_CONJUGATE * value as f64;
    let fraction = product - truncate(product);

    let index = floor(number_buckets.0 as f64 * fraction);
    let index = i128::from(index).rem_euclid(number_buckets.0 as i128);

    BucketIndex(index as usize)
}

//  Rounds towards 0.
//
//  |product| is below 0.62 * 2^63, and therefore fits in i64.
fn truncate(x: f64) -> f64 { x as i64 as f64 }

//  Rounds towards negative infinity.
//
//  `f64::floor` requires "std".
fn floor(x: f64) -> i64 {
    let truncated = x as i64;

    if (truncated as f64) > x { truncated - 1 } else { truncated }
}

//  mod tests
