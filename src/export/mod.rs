mod stylesheet;
mod tokens;
mod utility;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ButtonConfig;

pub use stylesheet::{state_selectors, stylesheet, BASE_SELECTOR};
pub use tokens::design_tokens;
pub use utility::utility_classes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Tailwind,
    Tokens,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Css, Self::Tailwind, Self::Tokens];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Tokens => "tokens",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownFormat(value.to_string()))
    }
}

/// Compiles `config` into the requested text artifact. The three formats are
/// produced independently; none reads another's output.
pub fn generate(config: &ButtonConfig, format: ExportFormat) -> String {
    let output = match format {
        ExportFormat::Css => stylesheet(config),
        ExportFormat::Tailwind => utility_classes(config),
        ExportFormat::Tokens => design_tokens(config),
    };
    tracing::debug!(%format, bytes = output.len(), "generated export");
    output
}
