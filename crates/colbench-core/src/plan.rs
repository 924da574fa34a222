//! Execution-plan blob loading.
//!
//! The harness treats plans as opaque bytes; interpreting them is the
//! engine's job, not ours.

use std::path::Path;

use crate::error::{Error, Result};

/// Read a plan description file into an opaque byte buffer.
pub fn load_plan(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::FileAccess(format!(
            "plan file not found: {}",
            path.display()
        )));
    }
    std::fs::read(path).map_err(|e| Error::Read(format!("plan read: {e}")))
}
