//! Zero-copy batch export.
//!
//! `to_ffi` moves refcounted buffer handles into the C structs' private
//! data; no column data is copied. The source `RecordBatch` therefore stays
//! valid for as long as the export needs it, for both the materialized and
//! the streaming iteration strategies.

use arrow::array::{Array, StructArray};
use arrow::ffi::{to_ffi, FFI_ArrowArray, FFI_ArrowSchema};
use arrow::record_batch::RecordBatch;

use colbench_core::error::{Error, Result};

/// One batch in the exchange representation.
///
/// Exclusively owned by exactly one side at a time: the source produces it,
/// returns it to the driver, and ownership transfers at that return. There
/// is no sharing and no second production for the same logical batch.
#[derive(Debug)]
pub struct ExportedBatch {
    array: FFI_ArrowArray,
    schema: FFI_ArrowSchema,
    num_rows: usize,
}

impl ExportedBatch {
    /// Export `batch` without copying column data.
    ///
    /// Fails with `Error::Export` when arrow cannot represent the batch's
    /// layout in the C Data Interface; the input batch is unaffected.
    pub fn export(batch: &RecordBatch) -> Result<Self> {
        let num_rows = batch.num_rows();
        let array = StructArray::from(batch.clone());
        let (array, schema) =
            to_ffi(&array.to_data()).map_err(|e| Error::Export(format!("to_ffi: {e}")))?;
        Ok(Self {
            array,
            schema,
            num_rows,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Consume the export into its C structs. The caller (or whatever
    /// foreign code the structs are passed to) must let their release
    /// callbacks run exactly once.
    pub fn into_parts(self) -> (FFI_ArrowArray, FFI_ArrowSchema) {
        (self.array, self.schema)
    }

    /// Write the C structs to caller-provided locations, transferring
    /// ownership across the boundary.
    ///
    /// Returns the row count, the conventional "rows loaded" signal of
    /// C-interface consumers.
    ///
    /// # Safety
    ///
    /// `out_array` and `out_schema` must be valid for writes and must not
    /// hold live (unreleased) structs; the consumer takes over the release
    /// obligation for what is written.
    pub unsafe fn into_raw(
        self,
        out_array: *mut FFI_ArrowArray,
        out_schema: *mut FFI_ArrowSchema,
    ) -> usize {
        let num_rows = self.num_rows;
        std::ptr::write(out_array, self.array);
        std::ptr::write(out_schema, self.schema);
        num_rows
    }
}
