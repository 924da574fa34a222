use thiserror::Error;

/// Canonical result for the harness.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Path missing or unreadable. Always raised at construction time,
    /// never lazily on a later pull.
    #[error("File access error: {0}")]
    FileAccess(String),

    /// File content is not the expected table encoding.
    #[error("Format error: {0}")]
    Format(String),

    /// I/O or decode failure while pulling a batch. For a streaming source
    /// this is terminal; callers must not pull past it expecting data.
    #[error("Read error: {0}")]
    Read(String),

    /// A batch could not be represented in the exchange structure.
    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
