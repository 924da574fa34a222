//! Test-data path resolution.
//!
//! Relative names are resolved against `COLBENCH_DATA_DIR` when set,
//! otherwise against the configured data directory. Absolute names pass
//! through untouched (still checked for existence).

use std::path::{Path, PathBuf};

use crate::config::BenchConfig;
use crate::error::{Error, Result};

pub const DATA_DIR_ENV: &str = "COLBENCH_DATA_DIR";

/// Resolve `name` to an absolute path of an existing file.
pub fn data_file_path(cfg: &BenchConfig, name: &str) -> Result<PathBuf> {
    let candidate = Path::new(name);
    let resolved = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        let root = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| cfg.data_dir.clone());
        Path::new(&root).join(candidate)
    };

    if !resolved.is_file() {
        return Err(Error::FileAccess(format!(
            "test data file not found: {}",
            resolved.display()
        )));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_file_access_error() {
        let cfg = BenchConfig {
            data_dir: "/nonexistent-colbench-dir".to_string(),
            ..Default::default()
        };
        let err = data_file_path(&cfg, "lineitem.parquet").unwrap_err();
        assert!(matches!(err, Error::FileAccess(_)));
    }

    #[test]
    fn test_relative_name_resolves_against_data_dir() {
        let mut dir = std::env::temp_dir();
        dir.push("colbench-paths-test");
        fs::create_dir_all(&dir).expect("mkdir");
        let file = dir.join("t.parquet");
        fs::write(&file, b"x").expect("write");

        let cfg = BenchConfig {
            data_dir: dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        let resolved = data_file_path(&cfg, "t.parquet").expect("resolve");
        assert_eq!(resolved, file);
    }
}
