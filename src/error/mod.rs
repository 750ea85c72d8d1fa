use std::io;
use std::path::PathBuf;

use crate::clipboard::ClipboardError;
use crate::presets::PresetError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("failed to read button config: {path}")]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to parse button config: {path}")]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize button config")]
    Serialize(#[from] serde_json::Error),
    #[error("no preset named '{0}'")]
    UnknownPreset(String),
    #[error("failed to write output")]
    Output(#[from] io::Error),
}
