use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tool settings loaded from `~/.config/shrinkcfg/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Task file used when no `--task` is given, relative to the working directory.
    #[serde(default = "default_task_file")]
    pub task_file: PathBuf,
    /// How many names `shrinkcfg names` prints by default.
    #[serde(default = "default_preview_names")]
    pub preview_names: usize,
}

fn default_task_file() -> PathBuf {
    PathBuf::from("shrinkcfg.toml")
}

fn default_preview_names() -> usize {
    10
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            task_file: default_task_file(),
            preview_names: default_preview_names(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shrinkcfg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ToolConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ToolConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ToolConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ToolConfig::default();
        assert_eq!(cfg.task_file, PathBuf::from("shrinkcfg.toml"));
        assert_eq!(cfg.preview_names, 10);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ToolConfig {
            task_file: PathBuf::from("build/proguard.toml"),
            preview_names: 3,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ToolConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: ToolConfig = toml::from_str("preview_names = 25").unwrap();
        assert_eq!(cfg.preview_names, 25);
        assert_eq!(cfg.task_file, PathBuf::from("shrinkcfg.toml"));

        let empty: ToolConfig = toml::from_str("").unwrap();
        assert_eq!(empty, ToolConfig::default());
    }
}
