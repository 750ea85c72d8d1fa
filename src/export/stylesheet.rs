use crate::model::{ButtonConfig, VisualState, WidthMode};
use crate::resolve::{
    resolve_background, resolve_filter, resolve_ring, resolve_shadow, resolve_text_shadow,
    resolve_transform, CssNumber, NONE,
};

pub const BASE_SELECTOR: &str = ".btn";

/// Emitted in every stylesheet, whether or not the icon or ripple uses them.
const KEYFRAMES: &str = "\
/* Keyframes */
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: .5; } }
@keyframes bounce { 0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8,0,1,1); } 50% { transform: none; animation-timing-function: cubic-bezier(0,0,0.2,1); } }
@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }

/* Ripple Effect */
.ripple {
  position: absolute;
  border-radius: 50%;
  transform: scale(0);
  animation: ripple 600ms linear;
  background-color: rgba(255, 255, 255, 0.3);
  pointer-events: none;
}

@keyframes ripple {
  to {
    transform: scale(2.5);
    opacity: 0;
  }
}";

struct RuleBlock {
    comment: Option<String>,
    selectors: Vec<String>,
    declarations: Vec<(&'static str, String)>,
}

impl RuleBlock {
    fn new(selectors: Vec<String>) -> Self {
        Self {
            comment: None,
            selectors,
            declarations: Vec::new(),
        }
    }

    fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        self.declarations.push((property, value.into()));
        self
    }

    fn render(&self, out: &mut String) {
        if let Some(comment) = &self.comment {
            out.push_str(&format!("/* {comment} */\n"));
        }
        out.push_str(&format!("{} {{\n", self.selectors.join(", ")));
        for (property, value) in &self.declarations {
            out.push_str(&format!("  {property}: {value};\n"));
        }
        out.push('}');
    }
}

/// Selectors for a state block: the native pseudo-class, then the
/// force-override class used by previews.
pub fn state_selectors(state: VisualState) -> Vec<String> {
    let mut selectors = Vec::with_capacity(2);
    if let Some(pseudo) = state.pseudo_class() {
        selectors.push(format!("{BASE_SELECTOR}{pseudo}"));
    }
    if let Some(class) = state.force_class() {
        selectors.push(format!("{BASE_SELECTOR}.{class}"));
    }
    if selectors.is_empty() {
        selectors.push(BASE_SELECTOR.to_string());
    }
    selectors
}

fn state_title(state: VisualState) -> &'static str {
    match state {
        VisualState::Default => "Default",
        VisualState::Hover => "Hover",
        VisualState::Active => "Active",
        VisualState::Focus => "Focus",
        VisualState::Disabled => "Disabled",
        VisualState::Loading => "Loading",
    }
}

fn base_block(config: &ButtonConfig) -> RuleBlock {
    let layout = &config.layout;
    let typography = &config.typography;
    let default = &config.states.default;
    let padding = layout.padding;
    let radius = layout.radius;

    let mut block = RuleBlock::new(vec![BASE_SELECTOR.to_string()]);
    block
        .set(
            "padding",
            format!(
                "{}px {}px {}px {}px",
                CssNumber(padding.top),
                CssNumber(padding.right),
                CssNumber(padding.bottom),
                CssNumber(padding.left)
            ),
        )
        .set(
            "border-radius",
            format!(
                "{}px {}px {}px {}px",
                CssNumber(radius.top_left),
                CssNumber(radius.top_right),
                CssNumber(radius.bottom_right),
                CssNumber(radius.bottom_left)
            ),
        )
        .set(
            "border",
            format!(
                "{}px {} {}",
                CssNumber(layout.border_width),
                layout.border_style.as_css(),
                default.border_color
            ),
        )
        .set(
            "width",
            match layout.width_mode {
                WidthMode::Auto => "auto".to_string(),
                WidthMode::Full => "100%".to_string(),
                WidthMode::Fixed => format!("{}px", CssNumber(layout.fixed_width)),
            },
        );
    if layout.min_width > 0.0 {
        block.set("min-width", format!("{}px", CssNumber(layout.min_width)));
    }
    if layout.max_width > 0.0 {
        block.set("max-width", format!("{}px", CssNumber(layout.max_width)));
    }

    block
        .set("font-family", typography.font_family.clone())
        .set("font-size", format!("{}px", CssNumber(typography.font_size)))
        .set("font-weight", typography.font_weight.clone())
        .set(
            "letter-spacing",
            format!("{}em", CssNumber(typography.letter_spacing)),
        )
        .set("line-height", CssNumber(typography.line_height).to_string())
        .set("text-transform", typography.text_transform.as_css())
        .set("text-shadow", resolve_text_shadow(&typography.text_shadow));

    let backdrop = if config.effects.backdrop_blur > 0.0 {
        format!("blur({}px)", CssNumber(config.effects.backdrop_blur))
    } else {
        NONE.to_string()
    };
    block
        .set("background", resolve_background(&default.background))
        .set("color", default.text_color.clone())
        .set("box-shadow", resolve_shadow(&default.shadows))
        .set("opacity", CssNumber(default.opacity).to_string())
        .set("filter", resolve_filter(default))
        .set("backdrop-filter", backdrop);

    block
        .set(
            "transition",
            format!(
                "all {}ms {} {}ms",
                CssNumber(config.motion.duration),
                config.motion.easing,
                CssNumber(config.motion.delay)
            ),
        )
        .set("cursor", default.cursor.as_css())
        .set("transform", resolve_transform(config, VisualState::Default))
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", format!("{}px", CssNumber(config.icon.gap)))
        .set("position", "relative")
        .set("overflow", "hidden")
        .set("user-select", "none");
    block
}

fn icon_block(config: &ButtonConfig) -> RuleBlock {
    let icon = &config.icon;
    let size = format!("{}px", CssNumber(icon.size));
    let mut block = RuleBlock::new(vec![format!("{BASE_SELECTOR} svg")]);
    block
        .set("width", size.clone())
        .set("height", size)
        .set("color", icon.css_color())
        .set("transition", "all 200ms ease")
        .set("transform", format!("rotate({}deg)", CssNumber(icon.rotate)));
    if let Some(animation) = icon.animation.css_animation() {
        block.set("animation", animation);
    }
    block
}

fn state_block(config: &ButtonConfig, state: VisualState) -> RuleBlock {
    let style = config.state(state);
    let mut block = RuleBlock::new(state_selectors(state))
        .with_comment(format!("State: {}", state_title(state)));

    let box_shadow = if state == VisualState::Focus {
        block.set("outline", "none");
        resolve_ring(style)
    } else {
        resolve_shadow(&style.shadows)
    };

    block
        .set("background", resolve_background(&style.background))
        .set("color", style.text_color.clone())
        .set("border-color", style.border_color.clone())
        .set("box-shadow", box_shadow)
        .set("opacity", CssNumber(style.opacity).to_string())
        .set("filter", resolve_filter(style))
        .set("cursor", style.cursor.as_css())
        .set("transform", resolve_transform(config, state));
    if state == VisualState::Disabled {
        block.set("pointer-events", "none");
    }
    block
}

pub fn stylesheet(config: &ButtonConfig) -> String {
    let mut blocks = vec![base_block(config), icon_block(config)];
    blocks.extend(
        VisualState::ALL
            .into_iter()
            .filter(|state| *state != VisualState::Default)
            .map(|state| state_block(config, state)),
    );

    let mut css = String::new();
    for block in &blocks {
        block.render(&mut css);
        css.push_str("\n\n");
    }
    css.push_str(KEYFRAMES);
    css.trim().to_string()
}
