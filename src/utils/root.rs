//! Re-export core/std/alloc facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{cmp, fmt, iter, result};

#[cfg(not(feature = "with-std"))]
pub use alloc::{string, vec};

#[cfg(feature = "with-std")]
pub use std::{cmp, fmt, iter, result, string, vec};
