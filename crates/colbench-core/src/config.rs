//! Run configuration that the driver and tests can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Directory containing the test-data files that relative names are
    /// resolved against.
    pub data_dir: String,

    /// How many times each worker drains its source.
    pub iterations: usize,

    /// Worker threads. Each worker owns its own source for its lifetime.
    pub threads: usize,

    /// Optional batch-size hint; the reader may clamp it to row-group
    /// boundaries.
    pub batch_size_hint: Option<usize>,

    /// Pin workers starting at this CPU index (worker `i` goes to
    /// `cpu + i`). None leaves scheduling to the OS.
    pub cpu: Option<usize>,

    /// Print per-batch row counts as they are pulled.
    pub print_result: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            iterations: 1,
            threads: 1,
            batch_size_hint: None,
            cpu: None,
            print_result: false,
        }
    }
}
