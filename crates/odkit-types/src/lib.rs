mod zone;
mod matrix;
mod scenario;
mod error;

pub use zone::{ZoneId, ZoneSystem};
pub use matrix::{MatrixData, MatrixId, MatrixKind};
pub use scenario::ScenarioNumber;
pub use error::{OdkitError, Result};

#[cfg(test)]
mod tests;
