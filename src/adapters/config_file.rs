//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] on top of a single pretty-printed JSON file.
//! A missing file loads as [`PanelConfig::default()`]; anything else that
//! fails is reported as a typed [`ConfigError`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::PanelConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<PanelConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("config: {} not found, using defaults", self.path.display());
                return Ok(PanelConfig::default());
            }
            Err(e) => return Err(ConfigError::Io(e.kind())),
        };
        let cfg: PanelConfig = serde_json::from_str(&text).map_err(|_| ConfigError::Corrupted)?;
        cfg.validate()?;
        info!("config: loaded from {}", self.path.display());
        Ok(cfg)
    }

    fn save(&self, config: &PanelConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        std::fs::write(&self.path, json).map_err(|e| ConfigError::Io(e.kind()))?;
        info!("config: saved to {}", self.path.display());
        Ok(())
    }
}
