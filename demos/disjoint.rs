//! A simple disjointness example.
//!
//! Two sets of odd numbers are built, without any value in common, and their
//! summaries and buckets are printed before checking that they are disjoint.
//!
//! Run with `RUST_LOG=chainset=trace` to see every insertion and resize.

extern crate chainset;
extern crate env_logger;

use chainset::intset::IntSet;

fn main() {
    const CAPACITY: usize = 10;

    env_logger::init();

    let mut first = IntSet::with_capacity(CAPACITY);
    first.extend([5, 7, 11, 13]);

    println!("{}", first);
    print!("{}", first.describe_buckets());

    let mut second = IntSet::with_capacity(CAPACITY);
    second.extend([1, 3, 9, 15]);

    println!("{}", second);
    print!("{}", second.describe_buckets());

    let disjoint = first.is_disjoint(&second);
    println!(">{}", disjoint);

    assert!(disjoint);

    //  Past 75% load, the buckets double.
    let mut grown = first.union(&second);
    grown.extend([17, 19, 21, 23, 25, 27, 29, 31, 33, 35, 37]);

    println!("{}", grown);
    print!("{}", grown.describe_buckets());

    grown.destroy();
}
