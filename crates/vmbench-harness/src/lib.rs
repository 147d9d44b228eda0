//! # vmbench harness
//!
//! Shared timing core for the vmbench benchmark binaries: a stopwatch over
//! the monotonic clock and the stdout measurement format.
//!
//! Each benchmark samples the clock immediately before its measured region,
//! runs the region, and prints the elapsed time as floating-point seconds.
//! stdout is reserved for measurements; diagnostics belong on stderr.

#![warn(missing_docs)]

pub mod report;
pub mod timer;

pub use report::{format_seconds, report_seconds};
pub use timer::Stopwatch;
