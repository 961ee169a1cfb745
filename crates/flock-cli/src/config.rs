use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flock_types::ViewMode;

/// Resolve the data directory path based on priority:
/// 1. FLOCK_PATH environment variable (with tilde expansion)
/// 2. XDG data directory (recommended default)
/// 3. ~/.flock (fallback for systems without XDG)
pub fn resolve_data_path() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("FLOCK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("flock"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".flock"));
    }

    anyhow::bail!("Could not determine data path: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_seed() -> u64 {
    1337
}

fn default_post_count() -> usize {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Seed for the mock feed; identical seeds produce identical data
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_post_count")]
    pub post_count: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            post_count: default_post_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// View the dashboard lands on
    #[serde(default)]
    pub default_view: ViewMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_path()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.feed.seed, 1337);
        assert_eq!(config.feed.post_count, 20);
        assert_eq!(config.dashboard.default_view, ViewMode::Chart);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.feed.seed = 99;
        config.dashboard.default_view = ViewMode::Table;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.feed.seed, 99);
        assert_eq!(loaded.dashboard.default_view, ViewMode::Table);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.feed.seed, 1337);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[feed]\nseed = 7\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.feed.seed, 7);
        assert_eq!(config.feed.post_count, 20);
        assert_eq!(config.dashboard.default_view, ViewMode::Chart);

        Ok(())
    }
}
