//! Transition rules, one per family of automaton.

mod fire;
mod life;
mod majority;
mod segregation;

pub use fire::SpreadingFire;
pub use life::GameOfLife;
pub use majority::MajorityVote;
pub use segregation::Segregation;

use crate::{Grid, ParameterSet, ParameterSpec, Random, Result, State};
use std::fmt::Debug;

/// Maps a cell's state and the states of its neighbors to the cell's state in
/// the next generation.
///
/// `next_state` must not depend on anything but its arguments. Rules that
/// draw random numbers must draw them from `rand`, never from a global
/// source, so that seeded runs repeat exactly.
pub trait TransitionRule: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Parameters this rule declares. Checked once when a simulation is
    /// loaded; the built-in rules also resolve their values at that point.
    fn parameters(&self) -> &'static [ParameterSpec] {
        &[]
    }

    /// Whether `state` is meaningful to this rule.
    fn recognizes(&self, state: State) -> bool;

    fn next_state(
        &self,
        state: State,
        neighbors: &[State],
        parameters: &ParameterSet,
        rand: &mut Random,
    ) -> Result<State>;

    /// Runs after every cell has a next state. `current` is the generation
    /// being replaced and `next` the one about to be committed. Rules that
    /// move occupants between cells finish the move here.
    fn settle(
        &self,
        _current: &Grid,
        _next: &mut Grid,
        _parameters: &ParameterSet,
        _rand: &mut Random,
    ) -> Result<()> {
        Ok(())
    }
}

fn count(neighbors: &[State], state: State) -> usize {
    neighbors
        .iter()
        .filter(|&&neighbor| neighbor == state)
        .count()
}
