//! colbench-ffi: Arrow C Data Interface export of record batches.
//!
//! One `ExportedBatch` is the exchange form of one batch: a pair of
//! `FFI_ArrowArray` / `FFI_ArrowSchema` structs whose embedded release
//! callbacks own the column buffers. Dropping an `ExportedBatch` releases
//! exactly once; `into_raw` instead hands both structs to a foreign consumer
//! and the release obligation moves with them.

pub mod export;

pub use export::ExportedBatch;
