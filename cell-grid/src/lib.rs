#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Dense two-dimensional grids of integer-coded cells, the neighbor lookup
//! that walks them, and the double-buffered generation swap that advances
//! them.

mod neighborhood;
mod random;

pub use neighborhood::{
    EdgeMode, NeighborPolicy, NeighborStates, Neighbors, ParseEdgeModeError, neighbors,
};
pub use random::Random;

use rayon::prelude::*;
use std::mem;
use std::ops::Index;
use thiserror::Error;

/// Integer state code of a cell. Meaning is up to the rule being run.
pub type State = i32;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell {row}, {col} is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions {
                width: width as usize,
                height: height as usize,
            });
        }
        Ok(Self { width, height })
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.row < self.height && loc.col < self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if size.contains(*self) {
            Some(self.row as usize * size.width as usize + self.col as usize)
        } else {
            None
        }
    }
}

/// One grid position and its state. The position never changes once the
/// cell is created; only the owning grid may change the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    loc: Loc,
    state: State,
}

impl Cell {
    fn new(loc: Loc, state: State) -> Self {
        Self { loc, state }
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }

    pub fn row(&self) -> u32 {
        self.loc.row
    }

    pub fn col(&self) -> u32 {
        self.loc.col
    }

    pub fn state(&self) -> State {
        self.state
    }
}

/// A single generation: every position of the grid holds exactly one cell,
/// stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: GridSize, state: State) -> Self {
        let cells = (0..size.height)
            .flat_map(|row| (0..size.width).map(move |col| Cell::new(Loc::new(row, col), state)))
            .collect();
        Self { size, cells }
    }

    /// Builds a grid from rows of state codes. All rows must have the same
    /// length and there must be at least one cell.
    pub fn from_states<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[State]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let size = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => GridSize::new(w, h)?,
            _ => return Err(GridError::InvalidDimensions { width, height }),
        };

        let mut cells = Vec::with_capacity(size.num_cells());
        for (row, states) in rows.iter().enumerate() {
            let states = states.as_ref();
            if states.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: states.len(),
                });
            }
            for (col, &state) in states.iter().enumerate() {
                cells.push(Cell::new(Loc::new(row as u32, col as u32), state));
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: u32, col: u32) -> Result<&Cell, GridError> {
        let loc = Loc::new(row, col);
        self.cell(loc).ok_or_else(|| self.out_of_bounds(loc))
    }

    pub fn set(&mut self, row: u32, col: u32, state: State) -> Result<(), GridError> {
        self.set_state(Loc::new(row, col), state)
    }

    pub fn set_state(&mut self, loc: Loc, state: State) -> Result<(), GridError> {
        let error = self.out_of_bounds(loc);
        let cell = self.cell_mut(loc).ok_or(error)?;
        cell.state = state;
        Ok(())
    }

    pub fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut Cell> {
        loc.grid_index(self.size)
            .map(|index| &mut self.cells[index])
    }

    /// Row-major traversal. Each call starts a fresh pass.
    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub fn states(&self) -> Vec<Vec<State>> {
        self.cells
            .chunks_exact(self.size.width as usize)
            .map(|row| row.iter().map(Cell::state).collect())
            .collect()
    }

    fn out_of_bounds(&self, loc: Loc) -> GridError {
        GridError::OutOfBounds {
            row: loc.row,
            col: loc.col,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

impl Index<Loc> for Grid {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The current generation plus a same-sized staging generation. Next states
/// are always computed from `cells` into `next_cells` and then swapped in.
#[derive(Clone, Debug)]
pub struct BufferedGrid {
    cells: Grid,
    next_cells: Grid,
}

impl BufferedGrid {
    pub fn new(cells: Grid) -> Self {
        Self {
            next_cells: cells.clone(),
            cells,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.cells
    }

    pub fn size(&self) -> GridSize {
        self.cells.size()
    }

    /// Advances one generation.
    ///
    /// `next_state` sees a cell of the current generation and its neighbor
    /// states, also from the current generation, and runs in parallel over
    /// rows. Each row draws from its own `Random` seeded from `rand`, so a
    /// seeded `rand` gives the same result on any thread count.
    ///
    /// `settle` then runs once with the full current generation and the
    /// computed staging generation, for rules that move state between
    /// cells. The generations are swapped only if both steps succeed.
    pub fn update<F, S, E>(
        &mut self,
        policy: &NeighborPolicy,
        rand: &mut Random,
        next_state: F,
        settle: S,
    ) -> Result<(), E>
    where
        F: Fn(&Cell, &[State], &mut Random) -> Result<State, E> + Sync,
        S: FnOnce(&Grid, &mut Grid, &mut Random) -> Result<(), E>,
        E: Send,
    {
        debug_assert_eq!(policy.size(), self.size());
        self.update_cells(policy, rand, next_state)?;
        settle(&self.cells, &mut self.next_cells, rand)?;
        mem::swap(&mut self.next_cells, &mut self.cells);
        Ok(())
    }

    fn update_cells<F, E>(
        &mut self,
        policy: &NeighborPolicy,
        rand: &mut Random,
        next_state: F,
    ) -> Result<(), E>
    where
        F: Fn(&Cell, &[State], &mut Random) -> Result<State, E> + Sync,
        E: Send,
    {
        let row_seeds: Vec<u64> = (0..self.cells.height())
            .map(|_| rand.next_seed())
            .collect();
        let cells = &self.cells;
        let width = cells.width() as usize;

        self.next_cells
            .cells
            .par_chunks_mut(width)
            .zip(row_seeds.into_par_iter())
            .try_for_each(|(next_row, seed)| {
                let mut row_rand = Random::from_seed(seed);
                for next_cell in next_row {
                    let cell = &cells[next_cell.loc];
                    let neighbors = policy.neighbor_states(cells, cell.loc);
                    next_cell.state = next_state(cell, &neighbors, &mut row_rand)?;
                }
                Ok(())
            })
    }
}
