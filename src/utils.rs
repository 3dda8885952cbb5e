//! Internal utilities.

pub mod root;
