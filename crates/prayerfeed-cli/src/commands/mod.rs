pub mod goals;
pub mod session;

use prayerfeed_core::{CoreError, GoalsConfig};
use std::path::Path;

/// Resolve the goal configuration: defaults, or the given TOML file.
pub fn load_goals(path: Option<&Path>) -> Result<GoalsConfig, CoreError> {
    match path {
        Some(path) => Ok(GoalsConfig::load(path)?),
        None => Ok(GoalsConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_falls_back_to_defaults() {
        let config = load_goals(None).unwrap();
        assert_eq!(config.church.minutes, 10);
        assert_eq!(config.personal.entries, 3);
    }

    #[test]
    fn unreadable_goals_file_surfaces_a_config_error() {
        let err = load_goals(Some(Path::new("/nonexistent/goals.toml"))).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/goals.toml"));
    }
}
