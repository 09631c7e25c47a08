use crate::error::{ConfigError, Error, Result, StateError};
use crate::rules::TransitionRule;
use crate::{ParameterSet, SimulationType};
use cell_grid::{BufferedGrid, Cell, EdgeMode, Grid, GridSize, NeighborPolicy, Random, State};
use log::{info, trace};
use std::collections::BTreeMap;

/// Runs one cellular automaton at a time.
///
/// A new manager holds no simulation; every query and `update` fails with
/// [`Error::NotInitialized`] until [`CellManager::initialize`] succeeds.
/// Initializing again replaces the whole simulation. A failed
/// initialization leaves the previous simulation, if any, untouched.
#[derive(Debug)]
pub struct CellManager {
    simulation: Option<Simulation>,
    rand: Random,
}

#[derive(Debug)]
struct Simulation {
    grid: BufferedGrid,
    policy: NeighborPolicy,
    rule: Box<dyn TransitionRule>,
    parameters: ParameterSet,
    generation: u64,
}

impl CellManager {
    pub fn new(rand: Random) -> Self {
        Self {
            simulation: None,
            rand,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Random::from_seed(seed))
    }

    pub fn is_initialized(&self) -> bool {
        self.simulation.is_some()
    }

    /// Loads a simulation from the tokens a configuration file would carry,
    /// e.g. `"toroidal"` and `"spreading_fire"`.
    pub fn initialize<R>(
        &mut self,
        state_grid: &[R],
        edge_type: &str,
        simulation_type: &str,
        parameters: ParameterSet,
    ) -> Result<()>
    where
        R: AsRef<[State]>,
    {
        let edge_mode: EdgeMode = edge_type
            .parse()
            .map_err(|_| ConfigError::UnknownEdgeType(edge_type.to_string()))?;
        let simulation_type: SimulationType = simulation_type.parse()?;
        let rule = simulation_type.rule(&parameters)?;
        self.initialize_with(state_grid, edge_mode, rule, parameters)
    }

    /// Loads a simulation running any rule.
    pub fn initialize_with<R>(
        &mut self,
        state_grid: &[R],
        edge_mode: EdgeMode,
        rule: Box<dyn TransitionRule>,
        parameters: ParameterSet,
    ) -> Result<()>
    where
        R: AsRef<[State]>,
    {
        let grid = Grid::from_states(state_grid)?;
        parameters.validate(rule.parameters())?;
        {
            let mut states = grid.cells_iter().map(Cell::state);
            if let Some(state) = states.find(|&state| !rule.recognizes(state)) {
                return Err(StateError::unrecognized(rule.name(), state).into());
            }
        }

        info!(
            "loaded {} simulation on a {}x{} {} grid",
            rule.name(),
            grid.width(),
            grid.height(),
            edge_mode
        );
        self.simulation = Some(Simulation {
            policy: NeighborPolicy::new(grid.size(), edge_mode),
            grid: BufferedGrid::new(grid),
            rule,
            parameters,
            generation: 0,
        });
        Ok(())
    }

    /// Advances every cell one generation, all from the same current
    /// generation. Either the whole generation is committed or, on error,
    /// nothing changes.
    pub fn update(&mut self) -> Result<()> {
        let simulation = self.simulation.as_mut().ok_or(Error::NotInitialized)?;
        simulation.update(&mut self.rand)
    }

    /// Snapshot of every cell in row-major order.
    pub fn cell_list(&self) -> Result<Vec<Cell>> {
        Ok(self.cells_iter()?.copied().collect())
    }

    pub fn cells_iter(&self) -> Result<impl DoubleEndedIterator<Item = &Cell> + Clone> {
        Ok(self.simulation()?.grid.current().cells_iter())
    }

    pub fn grid(&self) -> Result<&Grid> {
        Ok(self.simulation()?.grid.current())
    }

    pub fn dimensions(&self) -> Result<GridSize> {
        Ok(self.simulation()?.grid.size())
    }

    /// Number of generations committed since the simulation was loaded.
    pub fn generation(&self) -> Result<u64> {
        Ok(self.simulation()?.generation)
    }

    pub fn edge_mode(&self) -> Result<EdgeMode> {
        Ok(self.simulation()?.policy.edge_mode())
    }

    pub fn rule_name(&self) -> Result<&'static str> {
        Ok(self.simulation()?.rule.name())
    }

    pub fn parameters(&self) -> Result<&ParameterSet> {
        Ok(&self.simulation()?.parameters)
    }

    /// How many cells currently hold each state.
    pub fn state_counts(&self) -> Result<BTreeMap<State, usize>> {
        let mut counts = BTreeMap::new();
        for cell in self.cells_iter()? {
            *counts.entry(cell.state()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    fn simulation(&self) -> Result<&Simulation> {
        self.simulation.as_ref().ok_or(Error::NotInitialized)
    }
}

impl Simulation {
    fn update(&mut self, rand: &mut Random) -> Result<()> {
        let rule = self.rule.as_ref();
        let parameters = &self.parameters;
        self.grid.update(
            &self.policy,
            rand,
            |cell, neighbors, rand| rule.next_state(cell.state(), neighbors, parameters, rand),
            |current, next, rand| rule.settle(current, next, parameters, rand),
        )?;
        self.generation += 1;
        trace!("committed generation {}", self.generation);
        Ok(())
    }
}
