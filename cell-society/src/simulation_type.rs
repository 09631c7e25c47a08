use crate::error::ConfigError;
use crate::parameters::ParameterSet;
use crate::rules::{GameOfLife, MajorityVote, Segregation, SpreadingFire, TransitionRule};
use std::fmt;
use std::str::FromStr;

/// The rule families a simulation can be loaded with by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimulationType {
    GameOfLife,
    MajorityVote,
    SpreadingFire,
    Segregation,
}

impl SimulationType {
    pub const ALL: [SimulationType; 4] = [
        SimulationType::GameOfLife,
        SimulationType::MajorityVote,
        SimulationType::SpreadingFire,
        SimulationType::Segregation,
    ];

    /// Builds the rule with its parameter values resolved, so no lookup
    /// happens per cell once the simulation runs.
    pub fn rule(&self, parameters: &ParameterSet) -> Result<Box<dyn TransitionRule>, ConfigError> {
        Ok(match self {
            SimulationType::GameOfLife => Box::new(GameOfLife),
            SimulationType::MajorityVote => Box::new(MajorityVote::from_parameters(parameters)?),
            SimulationType::SpreadingFire => Box::new(SpreadingFire::from_parameters(parameters)?),
            SimulationType::Segregation => Box::new(Segregation::from_parameters(parameters)?),
        })
    }

    pub fn token(&self) -> &'static str {
        match self {
            SimulationType::GameOfLife => "game_of_life",
            SimulationType::MajorityVote => "majority_vote",
            SimulationType::SpreadingFire => "spreading_fire",
            SimulationType::Segregation => "segregation",
        }
    }
}

impl fmt::Display for SimulationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SimulationType {
    type Err = ConfigError;

    /// Case is ignored, as are `_`, `-` and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match token.as_str() {
            "gameoflife" | "life" => Ok(SimulationType::GameOfLife),
            "majority" | "majorityvote" => Ok(SimulationType::MajorityVote),
            "fire" | "spreadingfire" => Ok(SimulationType::SpreadingFire),
            "segregation" | "schelling" => Ok(SimulationType::Segregation),
            _ => Err(ConfigError::UnknownSimulationType(s.to_string())),
        }
    }
}
