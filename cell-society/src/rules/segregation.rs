use super::{TransitionRule, count};
use crate::error::ConfigError;
use crate::{Grid, Loc, ParameterSet, ParameterSpec, Random, Result, State};
use log::debug;

/// Schelling segregation. Every non-empty state is an agent type. An agent
/// is satisfied when no neighbor is occupied or when the share of occupied
/// neighbors holding its own type reaches `satisfaction_threshold`.
/// Unsatisfied agents leave their cell and move to a cell that was empty at
/// the start of the generation, if one is left.
#[derive(Clone, Copy, Debug)]
pub struct Segregation {
    satisfaction_threshold: f64,
    empty: State,
}

impl Segregation {
    pub const SATISFACTION_THRESHOLD: ParameterSpec =
        ParameterSpec::required("satisfaction_threshold")
            .in_range(0.0, 1.0);
    pub const EMPTY_STATE: ParameterSpec = ParameterSpec::optional("empty_state", 0.0)
        .in_range(State::MIN as f64, State::MAX as f64)
        .integral();

    pub fn new(satisfaction_threshold: f64, empty: State) -> Self {
        Self {
            satisfaction_threshold,
            empty,
        }
    }

    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self, ConfigError> {
        Ok(Self::new(
            parameters.value(&Self::SATISFACTION_THRESHOLD)?,
            parameters.value(&Self::EMPTY_STATE)? as State,
        ))
    }

    fn is_satisfied(&self, state: State, neighbors: &[State]) -> bool {
        let occupied = neighbors.len() - count(neighbors, self.empty);
        if occupied == 0 {
            return true;
        }
        let alike = count(neighbors, state);
        alike as f64 / occupied as f64 >= self.satisfaction_threshold
    }
}

impl TransitionRule for Segregation {
    fn name(&self) -> &'static str {
        "segregation"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &[Self::SATISFACTION_THRESHOLD, Self::EMPTY_STATE]
    }

    fn recognizes(&self, _state: State) -> bool {
        true
    }

    fn next_state(
        &self,
        state: State,
        neighbors: &[State],
        _parameters: &ParameterSet,
        _rand: &mut Random,
    ) -> Result<State> {
        if state == self.empty || self.is_satisfied(state, neighbors) {
            Ok(state)
        } else {
            Ok(self.empty)
        }
    }

    /// Places each agent that left its cell, in row-major order, into a
    /// randomly chosen cell that was empty in `current`. Agents left over
    /// when vacancies run out go back where they were.
    fn settle(
        &self,
        current: &Grid,
        next: &mut Grid,
        _parameters: &ParameterSet,
        rand: &mut Random,
    ) -> Result<()> {
        let empty = self.empty;
        let movers: Vec<(Loc, State)> = current
            .cells_iter()
            .filter(|cell| cell.state() != empty && next[cell.loc()].state() == empty)
            .map(|cell| (cell.loc(), cell.state()))
            .collect();
        if movers.is_empty() {
            return Ok(());
        }

        let mut vacancies: Vec<Loc> = current
            .cells_iter()
            .filter(|cell| cell.state() == empty)
            .map(|cell| cell.loc())
            .collect();
        rand.shuffle(&mut vacancies);
        debug!(
            "{} unsatisfied agents, {} vacancies",
            movers.len(),
            vacancies.len()
        );

        let mut vacancies = vacancies.into_iter();
        for (from, agent) in movers {
            let to = vacancies.next().unwrap_or(from);
            next.set_state(to, agent)?;
        }
        Ok(())
    }
}
