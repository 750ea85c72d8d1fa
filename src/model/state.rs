use serde::{Deserialize, Serialize};

use super::background::BackgroundInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    Default,
    Hover,
    Active,
    Focus,
    Disabled,
    Loading,
}

impl VisualState {
    pub const ALL: [VisualState; 6] = [
        Self::Default,
        Self::Hover,
        Self::Active,
        Self::Focus,
        Self::Disabled,
        Self::Loading,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Focus => "focus",
            Self::Disabled => "disabled",
            Self::Loading => "loading",
        }
    }

    /// Native pseudo-class for the state. Loading has none.
    pub const fn pseudo_class(self) -> Option<&'static str> {
        match self {
            Self::Hover => Some(":hover"),
            Self::Active => Some(":active"),
            Self::Focus => Some(":focus-visible"),
            Self::Disabled => Some(":disabled"),
            Self::Default | Self::Loading => None,
        }
    }

    /// Class that forces the state's styling without the real interaction.
    pub const fn force_class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Hover => Some("is-hover"),
            Self::Active => Some("is-active"),
            Self::Focus => Some("is-focus"),
            Self::Disabled => Some("is-disabled"),
            Self::Loading => Some("is-loading"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CursorKind {
    Default,
    #[default]
    Pointer,
    NotAllowed,
    Wait,
    Text,
    Move,
    Help,
}

impl CursorKind {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
            Self::Wait => "wait",
            Self::Text => "text",
            Self::Move => "move",
            Self::Help => "help",
        }
    }
}

/// A box or text shadow layer. Disabled layers stay in their sequence but
/// never render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    #[serde(default)]
    pub inset: bool,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl Shadow {
    pub fn new(x: f64, y: f64, blur: f64, spread: f64, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            blur,
            spread,
            color: color.into(),
            inset: false,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusRing {
    pub enabled: bool,
    pub width: f64,
    pub color: String,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTransform {
    pub scale: f64,
    pub translate_y: f64,
    pub translate_x: f64,
    pub rotate: f64,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Default for StateTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_y: 0.0,
            translate_x: 0.0,
            rotate: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateFilter {
    /// px
    pub blur: f64,
    /// %
    pub brightness: f64,
    /// %
    pub contrast: f64,
    /// %
    pub grayscale: f64,
}

impl Default for StateFilter {
    fn default() -> Self {
        Self {
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStyle {
    pub background: BackgroundInfo,
    pub text_color: String,
    pub border_color: String,
    pub opacity: f64,
    pub cursor: CursorKind,
    pub shadows: Vec<Shadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<FocusRing>,
    pub transform: StateTransform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<StateFilter>,
}

/// One record per [`VisualState`]. Every record is stored in full; nothing is
/// looked up from `default` at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateStyles {
    pub default: StateStyle,
    pub hover: StateStyle,
    pub active: StateStyle,
    pub focus: StateStyle,
    pub disabled: StateStyle,
    pub loading: StateStyle,
}

impl StateStyles {
    pub const fn get(&self, state: VisualState) -> &StateStyle {
        match state {
            VisualState::Default => &self.default,
            VisualState::Hover => &self.hover,
            VisualState::Active => &self.active,
            VisualState::Focus => &self.focus,
            VisualState::Disabled => &self.disabled,
            VisualState::Loading => &self.loading,
        }
    }

    pub(crate) fn get_mut(&mut self, state: VisualState) -> &mut StateStyle {
        match state {
            VisualState::Default => &mut self.default,
            VisualState::Hover => &mut self.hover,
            VisualState::Active => &mut self.active,
            VisualState::Focus => &mut self.focus,
            VisualState::Disabled => &mut self.disabled,
            VisualState::Loading => &mut self.loading,
        }
    }
}
