//! Shared fixtures for the cross-crate tests.

use odkit_mtx::MatrixFile;
use odkit_types::{MatrixData, MatrixKind};
use std::path::{Path, PathBuf};

/// Write a Frabitztown-compatible full demand matrix to `dir/file_name`
/// and return its path.
pub fn write_frabitztown_matrix(dir: &Path, file_name: &str) -> PathBuf {
    let zones = [1u32, 2, 3, 4];
    let data = MatrixData::full_from_fn(&zones, |o, d| (o * 10 + d) as f64);
    let mut file = MatrixFile::new(MatrixKind::Full, "demand", data);
    file.description = "test demand matrix".to_string();

    let path = dir.join(file_name);
    odkit_mtx::write_matrix(&path, &file).expect("fixture matrix is writable");
    path
}
