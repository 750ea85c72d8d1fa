use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError, APP_DIR};
use crate::model::ButtonConfig;

/// Versioned storage key. Bump the suffix when the stored config shape changes.
const PRESETS_FILE: &str = "button_presets_v2.json";

pub type PresetResult<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error(transparent)]
    ConfigPath(#[from] ConfigPathError),
    #[error("preset name is empty")]
    EmptyName,
    #[error("failed to read presets: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write presets: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse presets")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub config: ButtonConfig,
}

/// Named configs kept as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Store backed by `path`, starting empty until [`PresetStore::reload`].
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            presets: Vec::new(),
        }
    }

    pub fn open_default() -> PresetResult<Self> {
        let (xdg_config_home, home) = config_env_dirs();
        let mut store = Self::at(presets_path_with(xdg_config_home.as_deref(), home.as_deref())?);
        store.reload();
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|preset| preset.name.as_str())
    }

    /// First preset stored under `name`.
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Re-reads the file. A missing file means no presets. On a read or
    /// parse failure the error is logged and the current list is kept as is;
    /// returns whether the list was replaced.
    pub fn reload(&mut self) -> bool {
        match read_presets(&self.path) {
            Ok(presets) => {
                tracing::debug!(
                    count = presets.len(),
                    path = %self.path.display(),
                    "loaded presets"
                );
                self.presets = presets;
                true
            }
            Err(err) => {
                tracing::warn!(
                    ?err,
                    path = %self.path.display(),
                    "failed to load presets; keeping current list"
                );
                false
            }
        }
    }

    /// Appends `{name, config}` and persists the whole list. The in-memory
    /// list only changes once the write succeeds.
    pub fn save(&mut self, name: &str, config: &ButtonConfig) -> PresetResult<()> {
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }

        let mut updated = self.presets.clone();
        updated.push(Preset {
            name: name.to_string(),
            config: config.clone(),
        });
        write_presets(&self.path, &updated)?;
        self.presets = updated;
        tracing::info!(name, path = %self.path.display(), "saved preset");
        Ok(())
    }
}

fn presets_path_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> PresetResult<PathBuf> {
    Ok(app_config_path(APP_DIR, PRESETS_FILE, xdg_config_home, home)?)
}

fn read_presets(path: &Path) -> PresetResult<Vec<Preset>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let serialized = fs::read_to_string(path).map_err(|source| PresetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&serialized)?)
}

fn write_presets(path: &Path, presets: &[Preset]) -> PresetResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| PresetError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let serialized = serde_json::to_string_pretty(presets)?;
    fs::write(path, serialized).map_err(|source| PresetError::Write {
        path: path.to_path_buf(),
        source,
    })
}
