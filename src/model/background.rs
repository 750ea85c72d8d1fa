use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    /// Percentage along the gradient line, 0-100.
    pub position: f64,
    pub opacity: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
            opacity: 1.0,
        }
    }
}

/// Stops render in list order; nothing here sorts them by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// Degrees. Unused by radial gradients.
    pub angle: f64,
    pub stops: Vec<GradientStop>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: 135.0,
            stops: vec![
                GradientStop::new("#18181b", 0.0),
                GradientStop::new("#27272a", 100.0),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Solid,
    Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BackgroundInfo {
    Solid(String),
    Gradient(Gradient),
}

impl BackgroundInfo {
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    pub const fn kind(&self) -> BackgroundKind {
        match self {
            Self::Solid(_) => BackgroundKind::Solid,
            Self::Gradient(_) => BackgroundKind::Gradient,
        }
    }

    /// Converts to the other branch, dropping the current branch's value.
    pub fn converted_to(&self, kind: BackgroundKind) -> Self {
        match (self, kind) {
            (Self::Solid(_), BackgroundKind::Solid)
            | (Self::Gradient(_), BackgroundKind::Gradient) => self.clone(),
            (Self::Gradient(gradient), BackgroundKind::Solid) => Self::Solid(
                gradient
                    .stops
                    .first()
                    .map_or_else(|| "#000000".to_string(), |stop| stop.color.clone()),
            ),
            (Self::Solid(_), BackgroundKind::Gradient) => Self::Gradient(Gradient::default()),
        }
    }
}
