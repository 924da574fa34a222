//! The two batch-consumption strategies behind one pull contract.
//!
//! `pull()` returns `Ok(Some(batch))` until the file is exhausted, then
//! `Ok(None)` forever (the terminal state is idempotent). A read error on
//! the streaming path is terminal for that source; a failed export on the
//! streaming path drops that batch.

use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReader;

use colbench_core::error::{Error, Result};
use colbench_ffi::ExportedBatch;

use crate::reader::TableReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Materialized,
    Streaming,
}

/// One table file's worth of batches, pulled one at a time.
///
/// Owns its reader handle exclusively; no internal locking. Confine each
/// instance to one worker thread.
pub enum BatchSource {
    Materialized {
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
        cursor: usize,
    },
    Streaming {
        schema: SchemaRef,
        stream: ParquetRecordBatchReader,
        done: bool,
    },
}

impl std::fmt::Debug for BatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchSource::Materialized {
                schema,
                batches,
                cursor,
            } => f
                .debug_struct("Materialized")
                .field("schema", schema)
                .field("batches", &batches.len())
                .field("cursor", cursor)
                .finish(),
            BatchSource::Streaming { schema, done, .. } => f
                .debug_struct("Streaming")
                .field("schema", schema)
                .field("done", done)
                .finish_non_exhaustive(),
        }
    }
}

impl BatchSource {
    /// Eagerly decode the whole file at `path`, then serve pulls from the
    /// in-memory sequence.
    pub fn materialized(path: impl AsRef<Path>) -> Result<Self> {
        Self::materialized_from(TableReader::open(path)?)
    }

    /// Open `path` for one-batch-per-pull reading.
    pub fn streaming(path: impl AsRef<Path>) -> Result<Self> {
        Self::streaming_from(TableReader::open(path)?)
    }

    /// Materialized variant over an already-configured reader.
    pub fn materialized_from(reader: TableReader) -> Result<Self> {
        let schema = reader.schema();
        let batches = reader.into_batches()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(batches = batches.len(), "materialized input");
        Ok(BatchSource::Materialized {
            schema,
            batches,
            cursor: 0,
        })
    }

    /// Streaming variant over an already-configured reader.
    pub fn streaming_from(reader: TableReader) -> Result<Self> {
        let schema = reader.schema();
        let stream = reader.into_stream()?;
        Ok(BatchSource::Streaming {
            schema,
            stream,
            done: false,
        })
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            BatchSource::Materialized { .. } => SourceKind::Materialized,
            BatchSource::Streaming { .. } => SourceKind::Streaming,
        }
    }

    pub fn schema(&self) -> SchemaRef {
        match self {
            BatchSource::Materialized { schema, .. } => schema.clone(),
            BatchSource::Streaming { schema, .. } => schema.clone(),
        }
    }

    /// Next batch in exported form, or `Ok(None)` at end of stream.
    ///
    /// Materialized: cursor advance only, no I/O; a failed export leaves the
    /// cursor in place so the source stays usable. Streaming: asks the
    /// reader for exactly one batch; after a read error the source answers
    /// every later pull with the end signal.
    pub fn pull(&mut self) -> Result<Option<ExportedBatch>> {
        match self {
            BatchSource::Materialized {
                batches, cursor, ..
            } => {
                if *cursor >= batches.len() {
                    return Ok(None);
                }
                let exported = ExportedBatch::export(&batches[*cursor])?;
                *cursor += 1;
                #[cfg(feature = "tracing")]
                tracing::trace!(rows = exported.num_rows(), cursor = *cursor, "pulled batch");
                Ok(Some(exported))
            }
            BatchSource::Streaming { stream, done, .. } => {
                if *done {
                    return Ok(None);
                }
                match stream.next() {
                    None => {
                        *done = true;
                        Ok(None)
                    }
                    Some(Err(e)) => {
                        *done = true;
                        Err(Error::Read(format!("next batch: {e}")))
                    }
                    Some(Ok(batch)) => {
                        let exported = ExportedBatch::export(&batch)?;
                        #[cfg(feature = "tracing")]
                        tracing::trace!(rows = exported.num_rows(), "pulled batch");
                        Ok(Some(exported))
                    }
                }
            }
        }
    }
}
