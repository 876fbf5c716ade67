use thiserror::Error;

#[derive(Debug, Error)]
pub enum OdkitError {
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(u32),

    #[error("Scenario {0} already exists")]
    ScenarioExists(u32),

    #[error("Matrix {0} does not exist")]
    MatrixNotFound(String),

    #[error("Invalid matrix id: {0}")]
    InvalidMatrixId(String),

    #[error("Matrix type '{0}' is not recognized. Valid types are 1 for scalar, 2 for origin, 3 for destination, and 4 for full matrices")]
    InvalidMatrixKind(String),

    #[error("Asymmetrical matrix detected. Matrix must be square: {0}")]
    AsymmetricMatrix(String),

    #[error("Zone mismatch: {0}")]
    ZoneMismatch(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Selector error: {0}")]
    Selector(String),

    #[error("Module error: {0}")]
    Module(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for OdkitError {
    fn from(err: std::io::Error) -> Self {
        OdkitError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OdkitError>;
