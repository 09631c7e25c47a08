use crate::{Grid, GridError, GridSize, Loc, State};
use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type Neighbors = ArrayVec<Loc, 8>;
pub type NeighborStates = ArrayVec<State, 8>;

// Row-major order, skipping the center.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How neighbor lookup treats the border of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// Positions past the border do not exist.
    Bounded,
    /// Rows and columns wrap around, so every cell has 8 neighbors.
    Toroidal,
}

impl EdgeMode {
    pub fn token(&self) -> &'static str {
        match self {
            EdgeMode::Bounded => "bounded",
            EdgeMode::Toroidal => "toroidal",
        }
    }
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown edge type {0:?}")]
pub struct ParseEdgeModeError(pub String);

impl FromStr for EdgeMode {
    type Err = ParseEdgeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match token.as_str() {
            "bounded" | "finite" => Ok(EdgeMode::Bounded),
            "toroidal" | "torus" | "wrap" | "wrapped" => Ok(EdgeMode::Toroidal),
            _ => Err(ParseEdgeModeError(s.to_string())),
        }
    }
}

/// Moore neighborhood lookup for one grid size and edge mode. Both are fixed
/// for the life of a simulation, so one policy serves every generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborPolicy {
    size: GridSize,
    edge_mode: EdgeMode,
}

impl NeighborPolicy {
    pub fn new(size: GridSize, edge_mode: EdgeMode) -> Self {
        Self { size, edge_mode }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Neighbors of `center`, in row-major order. Under `Toroidal` there are
    /// always 8, with repeats on grids narrower or shorter than 3.
    pub fn neighbors(&self, center: Loc) -> Neighbors {
        debug_assert!(self.size.contains(center));
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(row_offset, col_offset)| {
                let row = self.adjacent_index(center.row, row_offset, self.size.height)?;
                let col = self.adjacent_index(center.col, col_offset, self.size.width)?;
                Some(Loc::new(row, col))
            })
            .collect()
    }

    pub fn neighbor_states(&self, grid: &Grid, center: Loc) -> NeighborStates {
        self.neighbors(center)
            .iter()
            .map(|&loc| grid[loc].state())
            .collect()
    }

    fn adjacent_index(&self, index: u32, offset: i64, max: u32) -> Option<u32> {
        let val = index as i64 + offset;
        match self.edge_mode {
            EdgeMode::Bounded => (0..max as i64).contains(&val).then_some(val as u32),
            EdgeMode::Toroidal => Some(Self::modulo(val, max)),
        }
    }

    fn modulo(val: i64, max: u32) -> u32 {
        val.rem_euclid(max as i64) as u32
    }
}

/// Neighbors of the cell at `row`, `col` in a `width` x `height` grid.
pub fn neighbors(
    row: u32,
    col: u32,
    width: u32,
    height: u32,
    edge_mode: EdgeMode,
) -> Result<Neighbors, GridError> {
    let size = GridSize::new(width, height)?;
    let center = Loc::new(row, col);
    if !size.contains(center) {
        return Err(GridError::OutOfBounds {
            row,
            col,
            width,
            height,
        });
    }
    Ok(NeighborPolicy::new(size, edge_mode).neighbors(center))
}
