use thiserror::Error;

/// All kinds of errors raised by the engine and its configuration.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid or game parameters that cannot produce a valid engine.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A name or value that does not map to anything known.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Cell index outside the grid.
    #[error("cell index {index} out of range for grid of {len} cells")]
    CellOutOfRange { index: usize, len: usize },

    /// Malformed configuration file.
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
