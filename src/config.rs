use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::session::round::RoundPlan;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_round_sizes")]
    pub round_sizes: [usize; 3],
}

fn default_round_sizes() -> [usize; 3] {
    RoundPlan::DEFAULT_SIZES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            round_sizes: default_round_sizes(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("blankr")
            .join("config.toml")
    }

    /// Reset degenerate values after deserialization; a round with zero
    /// slots would make its partition unreachable.
    pub fn normalize(&mut self) {
        if self.round_sizes.iter().any(|&size| size == 0) {
            self.round_sizes = default_round_sizes();
        }
    }

    pub fn round_plan(&self) -> RoundPlan {
        RoundPlan::new(self.round_sizes)
    }
}
