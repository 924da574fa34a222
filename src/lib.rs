//! Umbrella crate over the colbench workspace members.
//!
//! The root-level integration tests and benches import through these
//! re-exports; downstream code should depend on the member crates directly.

pub use colbench_core as core;
pub use colbench_ffi as ffi;
pub use colbench_source as source;
