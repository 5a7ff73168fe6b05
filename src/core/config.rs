use serde::Deserialize;
use std::path::{Path, PathBuf};

// ~/.config/base91x/config.toml, then ./base91x.toml
const USER_CONFIG_DIR: &str = "base91x";
const USER_CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "base91x.toml";

/// Effective settings of the command line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Line width for encoded output, 0 disables wrapping
    pub wrap: usize,
    /// Largest accepted input in bytes, 0 means unlimited
    pub max_size: usize,
}

/// One configuration file. Keys left out keep the value of earlier layers.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SettingsLayer {
    #[serde(default)]
    pub wrap: Option<usize>,
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl SettingsLayer {
    /// Parses a layer from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a layer from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl Settings {
    /// Loads the built-in settings bundled with the binary.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let layer = SettingsLayer::from_toml(include_str!("defaults.toml"))?;
        let mut settings = Self::default();
        settings.merge(layer);
        Ok(settings)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings
    /// 2. `~/.config/base91x/config.toml` (user overrides)
    /// 3. `./base91x.toml` (project-local overrides)
    ///
    /// A layer that cannot be read or parsed is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        let user_path = dirs::config_dir()
            .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
        let local_path = Some(PathBuf::from(LOCAL_CONFIG_FILE));

        for path in [user_path, local_path].into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            match SettingsLayer::load_from_file(&path) {
                Ok(layer) => {
                    tracing::debug!(path = %path.display(), "loaded config layer");
                    settings.merge(layer);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {}", e);
                }
            }
        }

        Ok(settings)
    }

    /// Applies the keys present in `layer` on top of these settings.
    pub fn merge(&mut self, layer: SettingsLayer) {
        if let Some(wrap) = layer.wrap {
            self.wrap = wrap;
        }
        if let Some(max_size) = layer.max_size {
            self.max_size = max_size;
        }
    }
}
