use crate::format::{MatrixFile, MTX_MAGIC};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use odkit_types::{OdkitError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Paths ending in `gz` get transparent gzip treatment, matching the
/// `.mtx.gz` convention of the original import tool.
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Write a binary matrix file to `path`
pub fn write_matrix(path: &Path, matrix: &MatrixFile) -> Result<()> {
    matrix.validate()?;

    let body = bincode::serialize(matrix)
        .map_err(|e| OdkitError::Format(format!("failed to encode matrix: {e}")))?;

    let file = File::create(path).map_err(|e| OdkitError::Io(format!("{}: {e}", path.display())))?;
    if is_gzipped(path) {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(&MTX_MAGIC)?;
        encoder.write_all(&body)?;
        encoder.finish()?;
    } else {
        let mut file = file;
        file.write_all(&MTX_MAGIC)?;
        file.write_all(&body)?;
    }
    Ok(())
}

/// Read a binary matrix file from `path`
pub fn read_matrix(path: &Path) -> Result<MatrixFile> {
    let file = File::open(path).map_err(|e| OdkitError::Io(format!("{}: {e}", path.display())))?;

    let mut raw = Vec::new();
    if is_gzipped(path) {
        GzDecoder::new(file)
            .read_to_end(&mut raw)
            .map_err(|e| OdkitError::Format(format!("{}: bad gzip stream: {e}", path.display())))?;
    } else {
        let mut file = file;
        file.read_to_end(&mut raw)?;
    }

    if raw.len() < MTX_MAGIC.len() || raw[..MTX_MAGIC.len()] != MTX_MAGIC {
        return Err(OdkitError::Format(format!(
            "{}: not an odkit matrix file",
            path.display()
        )));
    }

    let matrix: MatrixFile = bincode::deserialize(&raw[MTX_MAGIC.len()..])
        .map_err(|e| OdkitError::Format(format!("{}: corrupt matrix body: {e}", path.display())))?;
    matrix.validate()?;
    Ok(matrix)
}
