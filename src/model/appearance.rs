use serde::{Deserialize, Serialize};

use super::background::Gradient;
use super::state::Shadow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Capitalize => "capitalize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    pub font_family: String,
    /// px
    pub font_size: f64,
    pub font_weight: String,
    /// em
    pub letter_spacing: f64,
    pub line_height: f64,
    #[serde(default)]
    pub text_transform: TextTransform,
    /// Inset and spread are ignored when rendered.
    #[serde(default)]
    pub text_shadow: Vec<Shadow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconAnimation {
    #[default]
    None,
    Spin,
    Pulse,
    Bounce,
    Ping,
}

impl IconAnimation {
    /// Value of the `animation` declaration on the icon, if any.
    pub const fn css_animation(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Spin => Some("spin 1s linear infinite"),
            Self::Pulse => Some("pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
            Self::Bounce => Some("bounce 1s infinite"),
            Self::Ping => Some("ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
        }
    }
}

pub const ICON_COLOR_INHERIT: &str = "inherit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    pub enabled: bool,
    pub svg: String,
    pub position: IconPosition,
    pub size: f64,
    pub gap: f64,
    /// A color, or `inherit` to follow the text color.
    pub color: String,
    pub animation: IconAnimation,
    /// Static rotation in degrees.
    pub rotate: f64,
}

impl IconConfig {
    pub fn css_color(&self) -> &str {
        if self.color == ICON_COLOR_INHERIT {
            "currentColor"
        } else {
            &self.color
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EffectsConfig {
    pub backdrop_blur: f64,
    pub bg_blur: f64,
    pub border_gradient: Option<Gradient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// ms
    pub duration: f64,
    pub easing: String,
    /// ms
    pub delay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionsConfig {
    pub ripple: bool,
    pub magnetic: bool,
    pub magnetic_strength: f64,
    pub scale_on_press: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub enabled: bool,
    /// px
    pub perspective: f64,
    /// Degrees around the X axis.
    pub tilt: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(color: &str) -> IconConfig {
        IconConfig {
            enabled: true,
            svg: String::new(),
            position: IconPosition::Left,
            size: 16.0,
            gap: 8.0,
            color: color.to_string(),
            animation: IconAnimation::None,
            rotate: 0.0,
        }
    }

    #[test]
    fn icon_inherit_color_maps_to_current_color() {
        assert_eq!(icon("inherit").css_color(), "currentColor");
        assert_eq!(icon("#ff0000").css_color(), "#ff0000");
    }

    #[test]
    fn icon_animation_none_has_no_declaration() {
        assert_eq!(IconAnimation::None.css_animation(), None);
        assert_eq!(
            IconAnimation::Spin.css_animation(),
            Some("spin 1s linear infinite")
        );
    }

    #[test]
    fn effects_border_gradient_serializes_null_when_absent() {
        let value = serde_json::to_value(EffectsConfig::default()).unwrap();
        assert!(value["borderGradient"].is_null());
        assert_eq!(value["backdropBlur"], 0.0);
    }
}
