use super::{TransitionRule, count};
use crate::{ParameterSet, Random, Result, State, StateError};

/// Conway's Game of Life, B3/S23.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameOfLife;

impl GameOfLife {
    pub const DEAD: State = 0;
    pub const ALIVE: State = 1;
}

impl TransitionRule for GameOfLife {
    fn name(&self) -> &'static str {
        "game of life"
    }

    fn recognizes(&self, state: State) -> bool {
        state == Self::DEAD || state == Self::ALIVE
    }

    fn next_state(
        &self,
        state: State,
        neighbors: &[State],
        _parameters: &ParameterSet,
        _rand: &mut Random,
    ) -> Result<State> {
        let live_neighbors = count(neighbors, Self::ALIVE);
        let alive = match state {
            Self::ALIVE => (2..=3).contains(&live_neighbors),
            Self::DEAD => live_neighbors == 3,
            _ => return Err(StateError::unrecognized(self.name(), state).into()),
        };
        Ok(if alive { Self::ALIVE } else { Self::DEAD })
    }
}
