//! Convenient re-exports for downstream crates.

pub use crate::config::BenchConfig;
pub use crate::error::{Error, Result};
pub use crate::paths::data_file_path;
pub use crate::plan::load_plan;
pub use crate::split::{enumerate_splits, FileFormat, SplitInfo};
