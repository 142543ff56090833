//! Common utilities for the library.
//!

pub mod log;
pub mod stats;
