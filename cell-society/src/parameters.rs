use crate::error::ConfigError;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Declaration of one named parameter a rule reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSpec {
    pub key: &'static str,
    pub default: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub integral: bool,
}

impl ParameterSpec {
    pub const fn required(key: &'static str) -> Self {
        Self {
            key,
            default: None,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            integral: false,
        }
    }

    pub const fn optional(key: &'static str, default: f64) -> Self {
        Self {
            default: Some(default),
            ..Self::required(key)
        }
    }

    pub const fn in_range(self, min: f64, max: f64) -> Self {
        Self { min, max, ..self }
    }

    pub const fn integral(self) -> Self {
        Self {
            integral: true,
            ..self
        }
    }

    fn check(&self, value: f64) -> Result<f64, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidParameter {
            key: self.key.to_string(),
            value,
            reason,
        };
        if !value.is_finite() {
            return Err(invalid("is not a finite number".to_string()));
        }
        if value < self.min || value > self.max {
            return Err(invalid(format!("is outside [{}, {}]", self.min, self.max)));
        }
        if self.integral && value.fract() != 0.0 {
            return Err(invalid("is not a whole number".to_string()));
        }
        Ok(value)
    }
}

/// Named numeric parameters of one simulation, fixed once it is loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values
            .iter()
            .map(|(key, &value)| (key.as_str(), value))
    }

    /// The value for `spec`, falling back to its default.
    pub fn value(&self, spec: &ParameterSpec) -> Result<f64, ConfigError> {
        match (self.get(spec.key), spec.default) {
            (Some(value), _) => spec.check(value),
            (None, Some(default)) => Ok(default),
            (None, None) => Err(ConfigError::MissingParameter {
                key: spec.key.to_string(),
            }),
        }
    }

    /// Checks every declared parameter. Keys nobody declared are only
    /// logged.
    pub fn validate(&self, specs: &[ParameterSpec]) -> Result<(), ConfigError> {
        for spec in specs {
            let value = self.value(spec)?;
            debug!("parameter {} = {}", spec.key, value);
        }
        for key in self.values.keys() {
            if !specs.iter().any(|spec| spec.key == key.as_str()) {
                warn!("ignoring undeclared parameter {:?}", key);
            }
        }
        Ok(())
    }
}

impl<K> FromIterator<(K, f64)> for ParameterSet
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}
