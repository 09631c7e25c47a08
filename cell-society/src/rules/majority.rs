use super::{TransitionRule, count};
use crate::error::ConfigError;
use crate::{ParameterSet, ParameterSpec, Random, Result, State, StateError};

/// Threshold vote: a cell is active in the next generation exactly when at
/// least `activation_threshold` of its neighbors are active now.
#[derive(Clone, Copy, Debug)]
pub struct MajorityVote {
    activation_threshold: usize,
}

impl MajorityVote {
    pub const INACTIVE: State = 0;
    pub const ACTIVE: State = 1;

    pub const ACTIVATION_THRESHOLD: ParameterSpec = ParameterSpec::required("activation_threshold")
        .in_range(0.0, 8.0)
        .integral();

    pub fn new(activation_threshold: usize) -> Self {
        Self {
            activation_threshold,
        }
    }

    pub fn from_parameters(parameters: &ParameterSet) -> Result<Self, ConfigError> {
        let threshold = parameters.value(&Self::ACTIVATION_THRESHOLD)?;
        Ok(Self::new(threshold as usize))
    }
}

impl TransitionRule for MajorityVote {
    fn name(&self) -> &'static str {
        "majority vote"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &[Self::ACTIVATION_THRESHOLD]
    }

    fn recognizes(&self, state: State) -> bool {
        state == Self::INACTIVE || state == Self::ACTIVE
    }

    fn next_state(
        &self,
        state: State,
        neighbors: &[State],
        _parameters: &ParameterSet,
        _rand: &mut Random,
    ) -> Result<State> {
        if !self.recognizes(state) {
            return Err(StateError::unrecognized(self.name(), state).into());
        }
        Ok(if count(neighbors, Self::ACTIVE) >= self.activation_threshold {
            Self::ACTIVE
        } else {
            Self::INACTIVE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn next(state: State, neighbors: &[State], threshold: usize) -> Result<State> {
        MajorityVote::new(threshold).next_state(
            state,
            neighbors,
            &ParameterSet::new(),
            &mut Random::from_seed(0),
        )
    }

    #[test]
    fn activates_at_threshold() {
        assert_eq!(next(0, &[1, 1, 1, 0, 0], 3).unwrap(), 1);
        assert_eq!(next(0, &[1, 1, 0, 0, 0], 3).unwrap(), 0);
        assert_eq!(next(1, &[1, 1, 0, 0, 0], 3).unwrap(), 0);
        assert_eq!(next(1, &[0, 0, 0], 0).unwrap(), 1);
    }

    #[test]
    fn threshold_is_read_once_from_parameters() {
        assert!(matches!(
            MajorityVote::from_parameters(&ParameterSet::new()),
            Err(ConfigError::MissingParameter { .. })
        ));
        let params = ParameterSet::new().with("activation_threshold", 4.0);
        let rule = MajorityVote::from_parameters(&params).unwrap();
        assert_eq!(rule.activation_threshold, 4);
    }

    #[test]
    fn rejects_other_states() {
        assert!(matches!(
            next(3, &[1, 1], 1),
            Err(Error::State(StateError::UnrecognizedState { state: 3, .. }))
        ));
    }
}
