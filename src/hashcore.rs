//! Internal definition of the IntSet buckets.

pub mod capacity;
pub mod chains;
pub mod hash;

use super::failure;
use super::root;
use super::Value;
