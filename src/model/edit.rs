//! Copy-on-write edits. Each function leaves its input untouched and returns
//! the edited copy, so older configs held elsewhere stay valid.

use super::background::BackgroundKind;
use super::layout::{Corner, Edge};
use super::state::{Shadow, StateStyle, VisualState};
use super::ButtonConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTarget {
    All,
    Edge(Edge),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerTarget {
    All,
    Corner(Corner),
}

pub fn with_state(
    config: &ButtonConfig,
    state: VisualState,
    edit: impl FnOnce(&mut StateStyle),
) -> ButtonConfig {
    let mut next = config.clone();
    edit(next.states.get_mut(state));
    next
}

pub fn with_padding(config: &ButtonConfig, target: EdgeTarget, value: f64) -> ButtonConfig {
    let mut next = config.clone();
    let padding = &mut next.layout.padding;
    match target {
        EdgeTarget::All => {
            padding.top = value;
            padding.right = value;
            padding.bottom = value;
            padding.left = value;
        }
        EdgeTarget::Edge(Edge::Top) => padding.top = value,
        EdgeTarget::Edge(Edge::Right) => padding.right = value,
        EdgeTarget::Edge(Edge::Bottom) => padding.bottom = value,
        EdgeTarget::Edge(Edge::Left) => padding.left = value,
    }
    next
}

pub fn with_radius(config: &ButtonConfig, target: CornerTarget, value: f64) -> ButtonConfig {
    let mut next = config.clone();
    let radius = &mut next.layout.radius;
    match target {
        CornerTarget::All => {
            radius.top_left = value;
            radius.top_right = value;
            radius.bottom_right = value;
            radius.bottom_left = value;
        }
        CornerTarget::Corner(Corner::TopLeft) => radius.top_left = value,
        CornerTarget::Corner(Corner::TopRight) => radius.top_right = value,
        CornerTarget::Corner(Corner::BottomRight) => radius.bottom_right = value,
        CornerTarget::Corner(Corner::BottomLeft) => radius.bottom_left = value,
    }
    next
}

pub fn with_shadow_added(config: &ButtonConfig, state: VisualState) -> ButtonConfig {
    with_state(config, state, |style| {
        style
            .shadows
            .push(Shadow::new(0.0, 4.0, 6.0, -1.0, "rgba(0,0,0,0.1)"));
    })
}

/// Drops the shadow at `index`. An out-of-range index yields an unchanged copy.
pub fn with_shadow_removed(config: &ButtonConfig, state: VisualState, index: usize) -> ButtonConfig {
    with_state(config, state, |style| {
        if index < style.shadows.len() {
            style.shadows.remove(index);
        }
    })
}

pub fn with_shadow_enabled(
    config: &ButtonConfig,
    state: VisualState,
    index: usize,
    enabled: bool,
) -> ButtonConfig {
    with_state(config, state, |style| {
        if let Some(shadow) = style.shadows.get_mut(index) {
            shadow.enabled = enabled;
        }
    })
}

pub fn with_background_kind(
    config: &ButtonConfig,
    state: VisualState,
    kind: BackgroundKind,
) -> ButtonConfig {
    with_state(config, state, |style| {
        style.background = style.background.converted_to(kind);
    })
}
