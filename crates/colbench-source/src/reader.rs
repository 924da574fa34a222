//! Table-file reader over `parquet::arrow::arrow_reader`.
//!
//! Opening is eager: a `TableReader` that constructs successfully has a
//! readable file with a valid footer behind it, so sources fail fast instead
//! of erroring on the first pull.

use std::fs::File;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::{ParquetRecordBatchReader, ParquetRecordBatchReaderBuilder};

use colbench_core::error::{Error, Result};

pub struct TableReader {
    builder: ParquetRecordBatchReaderBuilder<File>,
    batch_size_hint: Option<usize>,
}

impl TableReader {
    /// Open `path` and parse its metadata.
    ///
    /// `Error::FileAccess` when the file cannot be opened, `Error::Format`
    /// when its content is not valid Parquet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::FileAccess(format!("open {}: {e}", path.display())))?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .map_err(|e| Error::Format(format!("{}: {e}", path.display())))?;
        Ok(Self {
            builder,
            batch_size_hint: None,
        })
    }

    /// Cap the rows decoded per batch. The reader decides its own chunking
    /// otherwise.
    pub fn with_batch_size(mut self, rows: usize) -> Self {
        self.batch_size_hint = Some(rows);
        self
    }

    pub fn schema(&self) -> SchemaRef {
        self.builder.schema().clone()
    }

    /// Row groups in the file, the reader's own notion of chunk count.
    pub fn row_group_count(&self) -> usize {
        self.builder.metadata().num_row_groups()
    }

    /// Total rows across all row groups, from metadata alone.
    pub fn row_count(&self) -> i64 {
        self.builder.metadata().file_metadata().num_rows()
    }

    fn build(self) -> Result<ParquetRecordBatchReader> {
        let mut builder = self.builder;
        if let Some(rows) = self.batch_size_hint {
            builder = builder.with_batch_size(rows);
        }
        builder
            .build()
            .map_err(|e| Error::Format(format!("reader build: {e}")))
    }

    /// Decode the entire file into an ordered batch sequence.
    ///
    /// Any failure partway is the whole read failing; no partial sequence
    /// is returned.
    pub fn into_batches(self) -> Result<Vec<RecordBatch>> {
        let reader = self.build()?;
        reader
            .into_iter()
            .map(|b| b.map_err(|e| Error::Read(format!("decode batch: {e}"))))
            .collect()
    }

    /// Obtain the incremental reader without pre-reading anything.
    pub fn into_stream(self) -> Result<ParquetRecordBatchReader> {
        self.build()
    }
}
