//! TOML-based goal configuration.
//!
//! Goals are daily base values; the week and year periods scale them by
//! their multiplier. They are configuration, not state: the aggregator
//! copies them at session start and never writes them back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

fn default_church_minutes() -> u64 {
    10
}
fn default_church_prayers() -> u64 {
    5
}
fn default_church_needs() -> u64 {
    3
}
fn default_personal_minutes() -> u64 {
    5
}
fn default_personal_entries() -> u64 {
    3
}

/// Daily goals for communal prayer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurchGoals {
    #[serde(default = "default_church_minutes")]
    pub minutes: u64,
    #[serde(default = "default_church_prayers")]
    pub prayers: u64,
    #[serde(default = "default_church_needs")]
    pub needs: u64,
}

impl Default for ChurchGoals {
    fn default() -> Self {
        Self {
            minutes: default_church_minutes(),
            prayers: default_church_prayers(),
            needs: default_church_needs(),
        }
    }
}

/// Daily goals for the private journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalGoals {
    #[serde(default = "default_personal_minutes")]
    pub minutes: u64,
    #[serde(default = "default_personal_entries")]
    pub entries: u64,
}

impl Default for PersonalGoals {
    fn default() -> Self {
        Self {
            minutes: default_personal_minutes(),
            entries: default_personal_entries(),
        }
    }
}

/// Goal configuration, serialized to/from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default)]
    pub church: ChurchGoals,
    #[serde(default)]
    pub personal: PersonalGoals,
}

impl GoalsConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: GoalsConfig =
            toml::from_str(s).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Every goal must be nonzero: progress ratios divide by them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("church.minutes", self.church.minutes),
            ("church.prayers", self.church.prayers),
            ("church.needs", self.church.needs),
            ("personal.minutes", self.personal.minutes),
            ("personal.entries", self.personal.entries),
        ];
        for (key, value) in fields {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "goal must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_prototype() {
        let config = GoalsConfig::default();
        assert_eq!(config.church.minutes, 10);
        assert_eq!(config.church.prayers, 5);
        assert_eq!(config.church.needs, 3);
        assert_eq!(config.personal.minutes, 5);
        assert_eq!(config.personal.entries, 3);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = GoalsConfig::from_toml("[church]\nminutes = 20\n").unwrap();
        assert_eq!(config.church.minutes, 20);
        assert_eq!(config.church.prayers, 5);
        assert_eq!(config.personal.entries, 3);
    }

    #[test]
    fn zero_goal_is_rejected() {
        let err = GoalsConfig::from_toml("[personal]\nentries = 0\n").unwrap_err();
        assert!(err.to_string().contains("personal.entries"));
    }

    #[test]
    fn toml_round_trip_preserves_goals() {
        let config = GoalsConfig::from_toml("[church]\nneeds = 4\n[personal]\nentries = 6\n").unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed = GoalsConfig::from_toml(&serialized).unwrap();
        assert_eq!(reparsed.church.needs, 4);
        assert_eq!(reparsed.personal.entries, 6);
        assert_eq!(reparsed.church.minutes, config.church.minutes);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[church]\nprayers = 8\n[personal]\nminutes = 15\n").unwrap();
        let config = GoalsConfig::load(file.path()).unwrap();
        assert_eq!(config.church.prayers, 8);
        assert_eq!(config.personal.minutes, 15);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = GoalsConfig::load(Path::new("/nonexistent/goals.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/goals.toml"));
    }
}
