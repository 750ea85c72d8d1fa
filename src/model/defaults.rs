use super::appearance::{
    EffectsConfig, IconAnimation, IconConfig, IconPosition, InteractionsConfig, MotionConfig,
    TextTransform, Transform3D, TypographyConfig, ICON_COLOR_INHERIT,
};
use super::background::BackgroundInfo;
use super::layout::{BorderStyle, CornerRadius, LayoutConfig, Spacing, WidthMode};
use super::state::{
    CursorKind, FocusRing, Shadow, StateFilter, StateStyle, StateStyles, StateTransform,
};
use super::ButtonConfig;

pub const DEFAULT_ARROW_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M5 12h14"/><path d="m12 5 7 7-7 7"/></svg>"#;

const SHADOW_SUBTLE: &str = "rgba(0,0,0,0.05)";
const SHADOW_SOFT: &str = "rgba(0,0,0,0.1)";

pub fn default_state_style() -> StateStyle {
    StateStyle {
        background: BackgroundInfo::solid("#18181b"),
        text_color: "#ffffff".to_string(),
        border_color: "#27272a".to_string(),
        opacity: 1.0,
        cursor: CursorKind::Pointer,
        shadows: vec![Shadow::new(0.0, 1.0, 2.0, 0.0, SHADOW_SUBTLE)],
        ring: None,
        transform: StateTransform::default(),
        filter: Some(StateFilter::default()),
    }
}

/// Copies `base` and applies `overrides` to the copy. Runs once while the
/// default config is built, so every state ends up fully populated.
fn derive_state(base: &StateStyle, overrides: impl FnOnce(&mut StateStyle)) -> StateStyle {
    let mut style = base.clone();
    overrides(&mut style);
    style
}

fn default_states() -> StateStyles {
    let base = default_state_style();

    let hover = derive_state(&base, |style| {
        style.background = BackgroundInfo::solid("#27272a");
        style.border_color = "#3f3f46".to_string();
        style.shadows = vec![
            Shadow::new(0.0, 1.0, 2.0, 0.0, SHADOW_SUBTLE),
            Shadow::new(0.0, 4.0, 6.0, -1.0, SHADOW_SOFT),
        ];
    });
    let active = derive_state(&base, |style| {
        style.background = BackgroundInfo::solid("#18181b");
        style.text_color = "#d4d4d8".to_string();
        style.transform.scale = 0.98;
        style.shadows.clear();
    });
    let focus = derive_state(&base, |style| {
        style.ring = Some(FocusRing {
            enabled: true,
            width: 2.0,
            color: "#3b82f6".to_string(),
            offset: 2.0,
        });
    });
    let disabled = derive_state(&base, |style| {
        style.background = BackgroundInfo::solid("#f4f4f5");
        style.text_color = "#a1a1aa".to_string();
        style.border_color = "#e4e4e7".to_string();
        style.shadows.clear();
        style.opacity = 0.5;
        style.cursor = CursorKind::NotAllowed;
    });
    let loading = derive_state(&base, |style| {
        style.opacity = 0.8;
        style.cursor = CursorKind::Wait;
    });

    StateStyles {
        default: base,
        hover,
        active,
        focus,
        disabled,
        loading,
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig {
                padding: Spacing::symmetric(12.0, 24.0),
                width_mode: WidthMode::Auto,
                fixed_width: 120.0,
                min_width: 0.0,
                max_width: 0.0,
                radius: CornerRadius::uniform(8.0),
                border_width: 1.0,
                border_style: BorderStyle::Solid,
            },
            typography: TypographyConfig {
                font_family: r#""Inter", sans-serif"#.to_string(),
                font_size: 14.0,
                font_weight: "500".to_string(),
                letter_spacing: 0.0,
                line_height: 1.5,
                text_transform: TextTransform::None,
                text_shadow: Vec::new(),
            },
            icon: IconConfig {
                enabled: false,
                svg: DEFAULT_ARROW_SVG.to_string(),
                position: IconPosition::Left,
                size: 16.0,
                gap: 8.0,
                color: ICON_COLOR_INHERIT.to_string(),
                animation: IconAnimation::None,
                rotate: 0.0,
            },
            effects: EffectsConfig::default(),
            motion: MotionConfig {
                duration: 200.0,
                easing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
                delay: 0.0,
            },
            interactions: InteractionsConfig {
                ripple: true,
                magnetic: false,
                magnetic_strength: 0.2,
                scale_on_press: 0.95,
            },
            transform: Transform3D {
                enabled: false,
                perspective: 1000.0,
                tilt: 0.0,
            },
            states: default_states(),
        }
    }
}
