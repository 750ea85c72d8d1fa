mod appearance;
mod background;
mod defaults;
pub mod edit;
mod layout;
mod state;

use serde::{Deserialize, Serialize};

pub use appearance::{
    EffectsConfig, IconAnimation, IconConfig, IconPosition, InteractionsConfig, MotionConfig,
    TextTransform, Transform3D, TypographyConfig, ICON_COLOR_INHERIT,
};
pub use background::{BackgroundInfo, BackgroundKind, Gradient, GradientKind, GradientStop};
pub use defaults::{default_state_style, DEFAULT_ARROW_SVG};
pub use layout::{BorderStyle, Corner, CornerRadius, Edge, LayoutConfig, Spacing, WidthMode};
pub use state::{
    CursorKind, FocusRing, Shadow, StateFilter, StateStyle, StateStyles, StateTransform,
    VisualState,
};

/// Complete visual description of a button.
///
/// Values are treated as immutable once handed to the resolver or an
/// exporter; edits go through [`edit`] and produce a new config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub layout: LayoutConfig,
    pub typography: TypographyConfig,
    pub icon: IconConfig,
    pub effects: EffectsConfig,
    pub motion: MotionConfig,
    pub interactions: InteractionsConfig,
    pub transform: Transform3D,
    pub states: StateStyles,
}

impl ButtonConfig {
    pub const fn state(&self, state: VisualState) -> &StateStyle {
        self.states.get(state)
    }
}
