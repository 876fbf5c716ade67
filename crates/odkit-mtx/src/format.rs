use odkit_types::{MatrixData, MatrixKind, OdkitError, Result};
use serde::{Deserialize, Serialize};

/// File magic for odkit binary matrix files
pub const MTX_MAGIC: [u8; 4] = *b"ODMX";

/// Current binary matrix format version
pub const MTX_VERSION: u32 = 1;

/// The decoded contents of a `.mtx` file.
///
/// The on-disk layout is the four magic bytes followed by the
/// bincode-encoded struct; `.gz` paths wrap the whole thing in gzip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixFile {
    pub version: u32,
    pub kind: MatrixKind,
    pub name: String,
    pub description: String,
    pub data: MatrixData,
}

impl MatrixFile {
    pub fn new(kind: MatrixKind, name: impl Into<String>, data: MatrixData) -> Self {
        MatrixFile {
            version: MTX_VERSION,
            kind,
            name: name.into(),
            description: String::new(),
            data,
        }
    }

    /// Check internal consistency before writing or after reading
    pub fn validate(&self) -> Result<()> {
        if self.version != MTX_VERSION {
            return Err(OdkitError::Format(format!(
                "unsupported matrix file version {} (expected {})",
                self.version, MTX_VERSION
            )));
        }
        if !self.data.compatible_with(self.kind) {
            return Err(OdkitError::Format(format!(
                "matrix data shape does not fit declared kind '{}'",
                self.kind
            )));
        }
        self.data.check_shape()
    }
}
