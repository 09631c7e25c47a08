use cell_grid::{GridError, State};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The simulation could not be set up as described. The caller may retry
    /// with a corrected configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The grid or a rule met data it cannot handle. Always a defect in the
    /// caller's data or in a rule.
    #[error("state error: {0}")]
    State(#[from] StateError),
    #[error("simulation has not been initialized")]
    NotInitialized,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown edge type {0:?}")]
    UnknownEdgeType(String),
    #[error("unknown simulation type {0:?}")]
    UnknownSimulationType(String),
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("missing required parameter {key:?}")]
    MissingParameter { key: String },
    #[error("parameter {key:?} = {value} {reason}")]
    InvalidParameter {
        key: String,
        value: f64,
        reason: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("cell {row}, {col} is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
    #[error("{rule} does not recognize state {state}")]
    UnrecognizedState { rule: &'static str, state: State },
}

impl StateError {
    pub fn unrecognized(rule: &'static str, state: State) -> Self {
        StateError::UnrecognizedState { rule, state }
    }
}

impl From<GridError> for Error {
    fn from(error: GridError) -> Self {
        match error {
            GridError::InvalidDimensions { width, height } => {
                ConfigError::InvalidDimensions { width, height }.into()
            }
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => ConfigError::RaggedRow {
                row,
                expected,
                found,
            }
            .into(),
            GridError::OutOfBounds {
                row,
                col,
                width,
                height,
            } => StateError::OutOfBounds {
                row,
                col,
                width,
                height,
            }
            .into(),
        }
    }
}
