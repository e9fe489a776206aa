// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

pub const CONFIG_ENV_VAR: &str = "TURNS_PANEL_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "turns-panel.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Game snapshot (`.json` / `.yaml`). A demo game is generated when unset.
    pub game_path: Option<PathBuf>,
    /// Name of the seat the local viewer plays.
    pub self_player: Option<String>,
    pub log_dir: PathBuf,
    pub pulse_period_ms: u64,
    pub tutorial: bool,
    pub demo_players: usize,
    pub demo_turns: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            game_path: None,
            self_player: None,
            log_dir: PathBuf::from("./logs"),
            pulse_period_ms: 2000,
            tutorial: true,
            demo_players: 4,
            demo_turns: 12,
        }
    }
}

impl PanelConfig {
    pub fn path_from_env() -> PathBuf {
        std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Missing file means defaults; an unreadable or invalid one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: PanelConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pulse_period_ms == 0 {
            return Err(PanelError::ConfigError(
                "pulse_period_ms must be greater than zero".to_string(),
            ));
        }
        if self.demo_players < 2 {
            return Err(PanelError::ConfigError(format!(
                "demo_players must be at least 2, got {}",
                self.demo_players
            )));
        }
        Ok(())
    }

    pub fn pulse_period(&self) -> Duration {
        Duration::from_millis(self.pulse_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PanelConfig::load(&dir.path().join("nope.yaml")).unwrap();

        assert_eq!(config.pulse_period(), Duration::from_millis(2000));
        assert!(config.tutorial);
        assert!(config.game_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "self_player: Bob\ntutorial: false").unwrap();

        let config = PanelConfig::load(file.path()).unwrap();
        assert_eq!(config.self_player.as_deref(), Some("Bob"));
        assert!(!config.tutorial);
        assert_eq!(config.demo_players, 4);
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_zero_pulse_period_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pulse_period_ms: 0").unwrap();

        assert!(matches!(PanelConfig::load(file.path()), Err(PanelError::ConfigError(_))));
    }

    #[test]
    fn test_single_demo_player_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "demo_players: 1").unwrap();

        assert!(matches!(PanelConfig::load(file.path()), Err(PanelError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "demo_players: [").unwrap();

        assert!(matches!(PanelConfig::load(file.path()), Err(PanelError::YamlError(_))));
    }
}
