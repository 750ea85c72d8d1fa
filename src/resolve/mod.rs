//! Resolved values: the encoded text of one visual property after omission
//! thresholds are applied. Every function here is pure and total.

use std::fmt;

use crate::model::{
    BackgroundInfo, ButtonConfig, GradientKind, GradientStop, Shadow, StateStyle, StateTransform,
    VisualState,
};

pub const NONE: &str = "none";

/// Surface color painted between the button and its focus ring.
pub const RING_SURFACE: &str = "var(--bg-color, white)";

/// Shortest round-trip decimal form; `-0` prints as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}

fn join_or_none(parts: Vec<String>, separator: &str) -> String {
    if parts.is_empty() {
        NONE.to_string()
    } else {
        parts.join(separator)
    }
}

fn gradient_stops(stops: &[GradientStop]) -> String {
    stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, CssNumber(stop.position)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn resolve_background(background: &BackgroundInfo) -> String {
    let gradient = match background {
        BackgroundInfo::Solid(color) => return color.clone(),
        BackgroundInfo::Gradient(gradient) => gradient,
    };
    let stops = gradient_stops(&gradient.stops);
    let angle = CssNumber(gradient.angle);
    match gradient.kind {
        GradientKind::Linear => format!("linear-gradient({angle}deg, {stops})"),
        GradientKind::Radial => format!("radial-gradient(circle at center, {stops})"),
        GradientKind::Conic => format!("conic-gradient(from {angle}deg at 50% 50%, {stops})"),
    }
}

pub fn resolve_shadow(shadows: &[Shadow]) -> String {
    let layers = shadows
        .iter()
        .filter(|shadow| shadow.enabled)
        .map(|shadow| {
            format!(
                "{inset}{x}px {y}px {blur}px {spread}px {color}",
                inset = if shadow.inset { "inset " } else { "" },
                x = CssNumber(shadow.x),
                y = CssNumber(shadow.y),
                blur = CssNumber(shadow.blur),
                spread = CssNumber(shadow.spread),
                color = shadow.color,
            )
        })
        .collect();
    join_or_none(layers, ", ")
}

pub fn resolve_text_shadow(shadows: &[Shadow]) -> String {
    let layers = shadows
        .iter()
        .filter(|shadow| shadow.enabled)
        .map(|shadow| {
            format!(
                "{}px {}px {}px {}",
                CssNumber(shadow.x),
                CssNumber(shadow.y),
                CssNumber(shadow.blur),
                shadow.color
            )
        })
        .collect();
    join_or_none(layers, ", ")
}

/// Terms are emitted in a fixed order and identity terms are dropped:
/// global 3-D tilt, scale, translateX, translateY, rotate, skewX, skewY.
pub fn resolve_transform(config: &ButtonConfig, state: VisualState) -> String {
    let StateTransform {
        scale,
        translate_y,
        translate_x,
        rotate,
        skew_x,
        skew_y,
    } = config.state(state).transform;
    let mut terms = Vec::new();

    if config.transform.enabled {
        terms.push(format!(
            "perspective({}px) rotateX({}deg)",
            CssNumber(config.transform.perspective),
            CssNumber(config.transform.tilt)
        ));
    }
    if scale != 1.0 {
        terms.push(format!("scale({})", CssNumber(scale)));
    }
    if translate_x != 0.0 {
        terms.push(format!("translateX({}px)", CssNumber(translate_x)));
    }
    if translate_y != 0.0 {
        terms.push(format!("translateY({}px)", CssNumber(translate_y)));
    }
    if rotate != 0.0 {
        terms.push(format!("rotate({}deg)", CssNumber(rotate)));
    }
    if skew_x != 0.0 {
        terms.push(format!("skewX({}deg)", CssNumber(skew_x)));
    }
    if skew_y != 0.0 {
        terms.push(format!("skewY({}deg)", CssNumber(skew_y)));
    }

    join_or_none(terms, " ")
}

pub fn resolve_filter(style: &StateStyle) -> String {
    let Some(filter) = style.filter else {
        return NONE.to_string();
    };
    let mut terms = Vec::new();
    if filter.blur > 0.0 {
        terms.push(format!("blur({}px)", CssNumber(filter.blur)));
    }
    if filter.brightness != 100.0 {
        terms.push(format!("brightness({}%)", CssNumber(filter.brightness)));
    }
    if filter.contrast != 100.0 {
        terms.push(format!("contrast({}%)", CssNumber(filter.contrast)));
    }
    if filter.grayscale > 0.0 {
        terms.push(format!("grayscale({}%)", CssNumber(filter.grayscale)));
    }
    join_or_none(terms, " ")
}

/// Focus ring drawn as two stacked box-shadows: a surface-colored gap of
/// `offset` px, then the ring itself.
pub fn resolve_ring(style: &StateStyle) -> String {
    match &style.ring {
        Some(ring) if ring.enabled => format!(
            "0 0 0 {offset}px {RING_SURFACE}, 0 0 0 {outer}px {color}",
            offset = CssNumber(ring.offset),
            outer = CssNumber(ring.width + ring.offset),
            color = ring.color,
        ),
        _ => NONE.to_string(),
    }
}
