use super::{LtsMethod, OutputMethod};
use crate::{
    algorithm::imputation::ImputationTable,
    model::{
        lts::{LtsError, LtsLevel},
        LtsCliError,
    },
};
use serde::{Deserialize, Serialize};

/// defines behaviors for an LTS classification run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct LtsConfiguration {
    pub lts_method: LtsMethod,
    pub lts_threshold: LtsLevel,
    pub output_method: OutputMethod,
    pub preference_multiplier: f64,
    pub missing_tolerance: f64,
    pub ignore_invalid_entries: bool,
    pub parallelize: bool,
    pub overwrite: bool,
}

impl Default for LtsConfiguration {
    fn default() -> Self {
        Self {
            lts_method: LtsMethod::default(),
            lts_threshold: LtsLevel::Lts2,
            output_method: OutputMethod::default(),
            preference_multiplier: 4.0,
            missing_tolerance: ImputationTable::DEFAULT_MISSING_TOLERANCE,
            ignore_invalid_entries: true,
            parallelize: true,
            overwrite: false,
        }
    }
}

impl LtsConfiguration {
    /// checks the configuration before any data is read
    pub fn validate(&self) -> Result<(), LtsError> {
        if !self.preference_multiplier.is_finite() || self.preference_multiplier <= 0.0 {
            return Err(LtsError::ConfigurationError(format!(
                "preference_multiplier must be a positive number, found {}",
                self.preference_multiplier
            )));
        }
        if !(0.0..=1.0).contains(&self.missing_tolerance) {
            return Err(LtsError::ConfigurationError(format!(
                "missing_tolerance must be a fraction in [0, 1], found {}",
                self.missing_tolerance
            )));
        }
        let max_level = self.lts_method.max_level();
        if self.lts_threshold > max_level {
            return Err(LtsError::ConfigurationError(format!(
                "lts_threshold {} exceeds the highest level of the {} method ({})",
                self.lts_threshold, self.lts_method, max_level
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for LtsConfiguration {
    type Error = LtsCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: LtsConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                LtsCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                LtsCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                LtsCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                LtsCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(LtsCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
