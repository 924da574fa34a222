#![forbid(unsafe_code)]
//! colbench-core: errors, run configuration, and data-file plumbing.
//!
//! Everything in here is ordinary blocking I/O and plain data. Batch
//! iteration and the Arrow C Data Interface export live in
//! `colbench-source` / `colbench-ffi`; this crate only resolves where the
//! inputs are and describes them.

pub mod config;
pub mod error;
pub mod paths;
pub mod plan;
pub mod prelude;
pub mod split;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use split::{FileFormat, SplitInfo};
