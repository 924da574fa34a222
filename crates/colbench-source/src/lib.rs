#![forbid(unsafe_code)]
//! colbench-source: batch sources over columnar table files.
//!
//! A `BatchSource` wraps one Parquet file and yields its record batches in
//! exported (Arrow C Data Interface) form, one `pull()` at a time. Two
//! strategies exist and no third is anticipated:
//!
//! - materialized: decode the whole file up front, then iterate a cursor.
//!   Isolates iteration cost from read cost; holds the decoded file in
//!   memory, so only suitable for benchmark-sized inputs.
//! - streaming: decode one batch per pull. Measures end-to-end latency with
//!   I/O interleaved; resident batch memory stays bounded by one batch.
//!
//! Sources are single-threaded; give each worker its own instance.

pub mod reader;
pub mod source;

pub use reader::TableReader;
pub use source::{BatchSource, SourceKind};
