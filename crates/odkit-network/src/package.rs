use crate::network::Network;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use odkit_types::{OdkitError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Current network package format version
pub const PACKAGE_VERSION: u32 = 1;

/// Export metadata carried alongside the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub exported_at: DateTime<Utc>,
    pub comment: String,
}

/// A scenario's network bundled for transfer between projects.
///
/// Serialized as gzipped JSON; this is odkit's own format, not an
/// interchange format with any external editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPackage {
    pub version: u32,
    pub info: PackageInfo,
    pub network: Network,
}

impl NetworkPackage {
    pub fn new(network: Network, comment: impl Into<String>) -> Self {
        NetworkPackage {
            version: PACKAGE_VERSION,
            info: PackageInfo {
                exported_at: Utc::now(),
                comment: comment.into(),
            },
            network,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let mut encoder = GzEncoder::new(writer, Compression::default());
        serde_json::to_writer(&mut encoder, self)
            .map_err(|e| OdkitError::Format(format!("failed to encode network package: {e}")))?;
        encoder.finish()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| OdkitError::Io(format!("{}: {e}", path.display())))?;
        let reader = BufReader::new(file);
        let decoder = GzDecoder::new(reader);
        let package: NetworkPackage = serde_json::from_reader(decoder)
            .map_err(|e| OdkitError::Format(format!("failed to decode network package: {e}")))?;
        if package.version != PACKAGE_VERSION {
            return Err(OdkitError::Format(format!(
                "unsupported network package version {} (expected {})",
                package.version, PACKAGE_VERSION
            )));
        }
        Ok(package)
    }
}
