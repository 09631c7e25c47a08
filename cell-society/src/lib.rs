#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Cellular automaton simulations over a [`cell_grid::Grid`]: a
//! [`CellManager`] owns one grid, one neighbor policy and one
//! [`TransitionRule`], and advances the grid a generation at a time.

mod error;
mod manager;
mod parameters;
pub mod rules;
mod simulation_type;

pub use cell_grid::{Cell, EdgeMode, Grid, GridSize, Loc, Random, State};
pub use error::{ConfigError, Error, Result, StateError};
pub use manager::CellManager;
pub use parameters::{ParameterSet, ParameterSpec};
pub use rules::TransitionRule;
pub use simulation_type::SimulationType;
