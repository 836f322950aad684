// error.rs - Error types for the simulator
//
// Configuration problems are rejected before any generation is computed.
// Once a valid grid exists every transition is total, so the only other
// failures are lookups with coordinates outside the grid.

use thiserror::Error;

/// Rejected simulation parameters. Each variant names the parameter at fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rows must be at least 1")]
    ZeroRows,

    #[error("cols must be at least 1")]
    ZeroCols,

    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("density {0} is outside [0.0, 1.0]")]
    DensityOutOfRange(f64),

    #[error("delay {0} must be a finite, non-negative number of seconds")]
    InvalidDelay(f64),

    #[error("flag '{0}' expects a value")]
    MissingValue(String),

    #[error("could not parse '{value}' for flag '{flag}'")]
    UnparsableValue { flag: String, value: String },

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid rows must all have the same, non-zero length")]
    RaggedRows,

    #[error("simulation loop has already been started")]
    AlreadyStarted,

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("pattern '{name}' does not fit in a {rows}x{cols} grid")]
    PatternDoesNotFit {
        name: &'static str,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
