//! # vmbench workloads
//!
//! The working sets the benchmark binaries drive: a receiver for dynamic
//! method dispatch, a chainable toggle switch, and allocation-heavy
//! container builders. Each module is one benchmark's workload; nothing
//! here does any timing.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod alloc;
pub mod dispatch;
pub mod switch;

pub use dispatch::{DispatchError, DispatchObject, FIELD_COUNT, METHOD_NAMES};
pub use switch::Switch;
