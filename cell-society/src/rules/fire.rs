use super::TransitionRule;
use crate::error::ConfigError;
use crate::{ParameterSet, ParameterSpec, Random, Result, State, StateError};

/// Forest fire. A burning cell burns out, a tree next to fire catches with
/// probability `prob_catch`, and bare ground regrows a tree with
/// probability `prob_grow`.
#[derive(Clone, Copy, Debug)]
pub struct SpreadingFire {
    prob_catch: f64,
    prob_grow: f64,
}

impl SpreadingFire {
    pub const EMPTY: State = 0;
    pub const TREE: State = 1;
    pub const BURNING: State = 2;

    pub const PROB_CATCH: ParameterSpec = ParameterSpec::required("prob_catch").in_range(0.0, 1.0);
    pub const PROB_GROW: ParameterSpec =
        ParameterSpec::optional("prob_grow", 0.0).in_range(0.0, 1.0);

    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self, ConfigError> {
        Ok(Self {
            prob_catch: parameters.value(&Self::PROB_CATCH)?,
            prob_grow: parameters.value(&Self::PROB_GROW)?,
        })
    }
}

impl TransitionRule for SpreadingFire {
    fn name(&self) -> &'static str {
        "spreading fire"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &[Self::PROB_CATCH, Self::PROB_GROW]
    }

    fn recognizes(&self, state: State) -> bool {
        matches!(state, Self::EMPTY | Self::TREE | Self::BURNING)
    }

    fn next_state(
        &self,
        state: State,
        neighbors: &[State],
        _parameters: &ParameterSet,
        rand: &mut Random,
    ) -> Result<State> {
        match state {
            Self::BURNING => Ok(Self::EMPTY),
            Self::TREE => {
                let exposed = neighbors.contains(&Self::BURNING);
                if exposed && rand.next_bool(self.prob_catch) {
                    Ok(Self::BURNING)
                } else {
                    Ok(Self::TREE)
                }
            }
            Self::EMPTY => {
                if rand.next_bool(self.prob_grow) {
                    Ok(Self::TREE)
                } else {
                    Ok(Self::EMPTY)
                }
            }
            _ => Err(StateError::unrecognized(self.name(), state).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(prob_catch: f64) -> SpreadingFire {
        let params = ParameterSet::new().with("prob_catch", prob_catch);
        SpreadingFire::from_parameters(&params).unwrap()
    }

    fn next(rule: &SpreadingFire, state: State, neighbors: &[State], rand: &mut Random) -> State {
        rule.next_state(state, neighbors, &ParameterSet::new(), rand)
            .unwrap()
    }

    #[test]
    fn certain_catch_spreads_to_exposed_trees_only() {
        let mut rand = Random::from_seed(1);
        let rule = fire(1.0);
        assert_eq!(next(&rule, 1, &[0, 2, 1], &mut rand), 2);
        assert_eq!(next(&rule, 1, &[0, 1, 1], &mut rand), 1);
        assert_eq!(next(&rule, 2, &[1, 1, 1], &mut rand), 0);
        assert_eq!(next(&rule, 0, &[2, 2, 2], &mut rand), 0);
    }

    #[test]
    fn zero_catch_never_spreads() {
        let mut rand = Random::from_seed(1);
        let rule = fire(0.0);
        for _ in 0..50 {
            assert_eq!(next(&rule, 1, &[2; 8], &mut rand), 1);
        }
    }

    #[test]
    fn empty_ground_regrows_when_asked() {
        let mut rand = Random::from_seed(1);
        let params = ParameterSet::new()
            .with("prob_catch", 0.5)
            .with("prob_grow", 1.0);
        let rule = SpreadingFire::from_parameters(&params).unwrap();
        assert_eq!(next(&rule, 0, &[], &mut rand), 1);
    }

    #[test]
    fn probabilities_are_checked_when_built() {
        let params = ParameterSet::new().with("prob_catch", 1.2);
        assert!(matches!(
            SpreadingFire::from_parameters(&params),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn same_seed_same_outcomes() {
        let rule = fire(0.5);
        let outcomes = |seed| {
            let mut rand = Random::from_seed(seed);
            (0..64)
                .map(|_| next(&rule, 1, &[2], &mut rand))
                .collect::<Vec<_>>()
        };
        assert_eq!(outcomes(9), outcomes(9));
        assert!(outcomes(9).contains(&1) && outcomes(9).contains(&2));
    }
}
