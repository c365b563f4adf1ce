//! Tactics configuration: three bounded sliders, orthogonal to assignment.
//!
//! Parameter names form a closed set validated at the boundary; values are
//! clamped to the slider range before storing, never rejected.

use serde::{Deserialize, Serialize};

use crate::error::{LineupError, Result};

/// Inclusive slider range for every tactics parameter.
pub const PARAM_MIN: i32 = 0;
pub const PARAM_MAX: i32 = 100;

/// The closed set of tactics parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TacticsParameter {
    Mentality,
    PressingIntensity,
    DefensiveLine,
}

impl TacticsParameter {
    pub const ALL: [TacticsParameter; 3] = [
        TacticsParameter::Mentality,
        TacticsParameter::PressingIntensity,
        TacticsParameter::DefensiveLine,
    ];

    /// Wire name, as used in persisted tactics records.
    pub fn name(&self) -> &'static str {
        match self {
            TacticsParameter::Mentality => "mentality",
            TacticsParameter::PressingIntensity => "pressing_intensity",
            TacticsParameter::DefensiveLine => "defensive_line",
        }
    }

    pub fn from_name(name: &str) -> Result<TacticsParameter> {
        TacticsParameter::ALL
            .iter()
            .copied()
            .find(|param| param.name() == name)
            .ok_or_else(|| LineupError::UnknownParameter {
                name: name.to_string(),
            })
    }
}

/// Current slider values. Defaults sit at the range midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticsConfig {
    pub mentality: u8,
    pub pressing_intensity: u8,
    pub defensive_line: u8,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            mentality: 50,
            pressing_intensity: 50,
            defensive_line: 50,
        }
    }
}

impl TacticsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, clamped into `[PARAM_MIN, PARAM_MAX]`.
    pub fn set(&mut self, param: TacticsParameter, value: i32) {
        let clamped = value.clamp(PARAM_MIN, PARAM_MAX) as u8;
        match param {
            TacticsParameter::Mentality => self.mentality = clamped,
            TacticsParameter::PressingIntensity => self.pressing_intensity = clamped,
            TacticsParameter::DefensiveLine => self.defensive_line = clamped,
        }
    }

    /// Boundary entry point: the name must belong to the closed parameter
    /// set; unknown names are rejected before any mutation.
    pub fn set_by_name(&mut self, name: &str, value: i32) -> Result<()> {
        let param = TacticsParameter::from_name(name)?;
        self.set(param, value);
        Ok(())
    }

    pub fn get(&self, param: TacticsParameter) -> u8 {
        match param {
            TacticsParameter::Mentality => self.mentality,
            TacticsParameter::PressingIntensity => self.pressing_intensity,
            TacticsParameter::DefensiveLine => self.defensive_line,
        }
    }

    /// Re-clamp every field. Used when values arrive from outside the
    /// setters, e.g. a deserialized snapshot.
    pub fn normalized(self) -> Self {
        let mut config = self;
        for param in TacticsParameter::ALL {
            config.set(param, i32::from(config.get(param)));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_clamp_to_slider_range() {
        let mut config = TacticsConfig::new();
        config.set(TacticsParameter::Mentality, 150);
        assert_eq!(config.mentality, 100);
        config.set(TacticsParameter::Mentality, -5);
        assert_eq!(config.mentality, 0);
        config.set(TacticsParameter::Mentality, 73);
        assert_eq!(config.mentality, 73);
    }

    #[test]
    fn parameters_are_independent() {
        let mut config = TacticsConfig::new();
        config.set(TacticsParameter::PressingIntensity, 80);
        assert_eq!(config.pressing_intensity, 80);
        assert_eq!(config.mentality, 50);
        assert_eq!(config.defensive_line, 50);
    }

    #[test]
    fn unknown_parameter_name_rejected() {
        let mut config = TacticsConfig::new();
        let before = config;
        let err = config.set_by_name("tempo", 70).unwrap_err();
        assert_eq!(
            err,
            LineupError::UnknownParameter {
                name: "tempo".to_string()
            }
        );
        assert_eq!(config, before);

        config.set_by_name("defensive_line", 35).unwrap();
        assert_eq!(config.defensive_line, 35);
    }

    #[test]
    fn wire_names_round_trip() {
        for param in TacticsParameter::ALL {
            assert_eq!(TacticsParameter::from_name(param.name()).unwrap(), param);
        }
    }
}
