mod format;
mod codec;

pub use codec::{read_matrix, write_matrix};
pub use format::{MatrixFile, MTX_MAGIC, MTX_VERSION};

#[cfg(test)]
mod tests;
