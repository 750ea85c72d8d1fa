use crate::model::{BorderStyle, ButtonConfig, StateStyle, TextTransform, WidthMode};
use crate::resolve::{resolve_background, resolve_shadow, CssNumber};

/// Bracketed arbitrary value. Whitespace runs become `_` so the value stays a
/// single class token.
fn arbitrary(value: &str) -> String {
    let encoded = value.split_whitespace().collect::<Vec<_>>().join("_");
    format!("[{encoded}]")
}

fn px(value: f64) -> String {
    format!("[{}px]", CssNumber(value))
}

/// Per-state coverage. Focus and loading have no row on purpose; only these
/// four variants are rendered as utility classes.
struct Variant {
    prefix: &'static str,
    shadow: bool,
    always_opacity: bool,
    extra: &'static [&'static str],
}

const DEFAULT_VARIANT: Variant = Variant {
    prefix: "",
    shadow: true,
    always_opacity: false,
    extra: &[],
};
const HOVER_VARIANT: Variant = Variant {
    prefix: "hover:",
    shadow: true,
    always_opacity: false,
    extra: &[],
};
const ACTIVE_VARIANT: Variant = Variant {
    prefix: "active:",
    shadow: false,
    always_opacity: false,
    extra: &[],
};
const DISABLED_VARIANT: Variant = Variant {
    prefix: "disabled:",
    shadow: false,
    always_opacity: true,
    extra: &["cursor-not-allowed"],
};

fn push_layout_tokens(config: &ButtonConfig, tokens: &mut Vec<String>) {
    let layout = &config.layout;
    tokens.push(match layout.width_mode {
        WidthMode::Full => "w-full".to_string(),
        WidthMode::Fixed => format!("w-{}", px(layout.fixed_width)),
        WidthMode::Auto => "w-auto".to_string(),
    });
    if layout.min_width > 0.0 {
        tokens.push(format!("min-w-{}", px(layout.min_width)));
    }
    if layout.max_width > 0.0 {
        tokens.push(format!("max-w-{}", px(layout.max_width)));
    }

    let padding = layout.padding;
    if padding.is_uniform() {
        tokens.push(format!("p-{}", px(padding.top)));
    } else if padding.is_axis_paired() {
        tokens.push(format!("px-{}", px(padding.left)));
        tokens.push(format!("py-{}", px(padding.top)));
    } else {
        tokens.push(format!("pt-{}", px(padding.top)));
        tokens.push(format!("pb-{}", px(padding.bottom)));
        tokens.push(format!("pl-{}", px(padding.left)));
        tokens.push(format!("pr-{}", px(padding.right)));
    }

    // Radius has no axis-paired tier, unlike padding.
    let radius = layout.radius;
    if radius.is_uniform() {
        tokens.push(format!("rounded-{}", px(radius.top_left)));
    } else {
        tokens.push(format!("rounded-tl-{}", px(radius.top_left)));
        tokens.push(format!("rounded-tr-{}", px(radius.top_right)));
        tokens.push(format!("rounded-br-{}", px(radius.bottom_right)));
        tokens.push(format!("rounded-bl-{}", px(radius.bottom_left)));
    }

    if layout.border_width > 0.0 {
        tokens.push(format!("border-{}", px(layout.border_width)));
    }
    if layout.border_style != BorderStyle::Solid {
        tokens.push(format!("border-{}", layout.border_style.as_css()));
    }
}

fn push_typography_tokens(config: &ButtonConfig, tokens: &mut Vec<String>) {
    let typography = &config.typography;
    tokens.push(format!("font-{}", arbitrary(&typography.font_family)));
    tokens.push(format!("text-{}", px(typography.font_size)));
    tokens.push(format!("font-{}", arbitrary(&typography.font_weight)));
    tokens.push(format!(
        "tracking-[{}em]",
        CssNumber(typography.letter_spacing)
    ));
    tokens.push(format!("leading-[{}]", CssNumber(typography.line_height)));
    if typography.text_transform != TextTransform::None {
        tokens.push(typography.text_transform.as_css().to_string());
    }
}

fn push_effect_and_motion_tokens(config: &ButtonConfig, tokens: &mut Vec<String>) {
    let effects = &config.effects;
    if effects.backdrop_blur > 0.0 {
        tokens.push(format!("backdrop-blur-{}", px(effects.backdrop_blur)));
    }
    if effects.bg_blur > 0.0 {
        tokens.push(format!("blur-{}", px(effects.bg_blur)));
    }

    let motion = &config.motion;
    tokens.push("transition-all".to_string());
    tokens.push(format!("duration-[{}ms]", CssNumber(motion.duration)));
    tokens.push(format!("ease-{}", arbitrary(&motion.easing)));
    tokens.push(format!("delay-[{}ms]", CssNumber(motion.delay)));
}

fn push_variant_tokens(style: &StateStyle, variant: &Variant, tokens: &mut Vec<String>) {
    let prefix = variant.prefix;
    tokens.push(format!(
        "{prefix}bg-{}",
        arbitrary(&resolve_background(&style.background))
    ));
    tokens.push(format!("{prefix}text-{}", arbitrary(&style.text_color)));
    tokens.push(format!("{prefix}border-{}", arbitrary(&style.border_color)));
    if variant.always_opacity || style.opacity != 1.0 {
        tokens.push(format!("{prefix}opacity-[{}]", CssNumber(style.opacity)));
    }
    if variant.shadow && !style.shadows.is_empty() {
        tokens.push(format!(
            "{prefix}shadow-{}",
            arbitrary(&resolve_shadow(&style.shadows))
        ));
    }
    tokens.extend(variant.extra.iter().map(|extra| format!("{prefix}{extra}")));
}

pub fn utility_classes(config: &ButtonConfig) -> String {
    let mut tokens = Vec::new();
    push_layout_tokens(config, &mut tokens);
    push_typography_tokens(config, &mut tokens);
    push_effect_and_motion_tokens(config, &mut tokens);

    let states = &config.states;
    push_variant_tokens(&states.default, &DEFAULT_VARIANT, &mut tokens);
    push_variant_tokens(&states.hover, &HOVER_VARIANT, &mut tokens);
    push_variant_tokens(&states.active, &ACTIVE_VARIANT, &mut tokens);
    push_variant_tokens(&states.disabled, &DISABLED_VARIANT, &mut tokens);

    if config.icon.enabled {
        tokens.push("[&_svg]:stroke-current".to_string());
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{edit, BackgroundInfo, CornerRadius, Gradient, Spacing, VisualState};

    fn tokens(config: &ButtonConfig) -> Vec<String> {
        utility_classes(config)
            .split(' ')
            .map(str::to_string)
            .collect()
    }

    fn with_padding(padding: Spacing) -> ButtonConfig {
        let mut config = ButtonConfig::default();
        config.layout.padding = padding;
        config
    }

    fn with_radius(radius: CornerRadius) -> ButtonConfig {
        let mut config = ButtonConfig::default();
        config.layout.radius = radius;
        config
    }

    fn count_prefixed(tokens: &[String], prefixes: &[&str]) -> usize {
        tokens
            .iter()
            .filter(|token| prefixes.iter().any(|prefix| token.starts_with(prefix)))
            .count()
    }

    #[test]
    fn utility_classes_are_deterministic_and_single_spaced() {
        let config = ButtonConfig::default();
        let classes = utility_classes(&config);
        assert_eq!(classes, utility_classes(&config));
        assert!(!classes.contains("  "));
        assert!(!classes.ends_with(' '));
        assert!(tokens(&config).iter().all(|token| !token.is_empty()));
    }

    #[test]
    fn uniform_padding_collapses_to_single_token() {
        let tokens = tokens(&with_padding(Spacing::uniform(12.0)));
        assert_eq!(
            tokens.iter().filter(|token| *token == "p-[12px]").count(),
            1
        );
        assert_eq!(count_prefixed(&tokens, &["pt-", "pb-", "pl-", "pr-", "px-", "py-"]), 0);
    }

    #[test]
    fn axis_paired_padding_uses_px_and_py() {
        let classes = utility_classes(&with_padding(Spacing::symmetric(12.0, 24.0)));
        assert!(classes.contains("px-[24px] py-[12px]"));
        let tokens = tokens(&with_padding(Spacing::symmetric(12.0, 24.0)));
        assert_eq!(count_prefixed(&tokens, &["p-[", "pt-", "pb-", "pl-", "pr-"]), 0);
    }

    #[test]
    fn uneven_padding_uses_four_edge_tokens() {
        let tokens = tokens(&with_padding(Spacing {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        }));
        for expected in ["pt-[1px]", "pb-[3px]", "pl-[4px]", "pr-[2px]"] {
            assert!(tokens.iter().any(|token| token == expected), "{expected}");
        }
        assert_eq!(count_prefixed(&tokens, &["p-[", "px-", "py-"]), 0);
    }

    #[test]
    fn uniform_radius_collapses_to_single_token() {
        let tokens = tokens(&with_radius(CornerRadius::uniform(8.0)));
        assert_eq!(
            tokens.iter().filter(|token| *token == "rounded-[8px]").count(),
            1
        );
        assert_eq!(count_prefixed(&tokens, &["rounded-t", "rounded-b"]), 0);
    }

    #[test]
    fn paired_radius_still_renders_four_corners() {
        let tokens = tokens(&with_radius(CornerRadius {
            top_left: 8.0,
            top_right: 4.0,
            bottom_right: 8.0,
            bottom_left: 4.0,
        }));
        let corners = ["rounded-tl-", "rounded-tr-", "rounded-br-", "rounded-bl-"];
        assert_eq!(count_prefixed(&tokens, &corners), 4);
        assert!(!tokens.iter().any(|token| token.starts_with("rounded-[")));
        assert!(tokens.iter().any(|token| token == "rounded-tr-[4px]"));
    }

    #[test]
    fn focus_and_loading_are_never_rendered() {
        let mut config = ButtonConfig::default();
        config.states.loading.opacity = 0.3;
        let tokens = tokens(&config);
        assert_eq!(count_prefixed(&tokens, &["focus:", "focus-visible:", "loading:"]), 0);
        assert!(!tokens.iter().any(|token| token.contains("opacity-[0.3]")));
    }

    #[test]
    fn default_config_renders_expected_state_tokens() {
        let tokens = tokens(&ButtonConfig::default());
        for expected in [
            "w-auto",
            "border-[1px]",
            "font-[\"Inter\",_sans-serif]",
            "font-[500]",
            "tracking-[0em]",
            "leading-[1.5]",
            "transition-all",
            "duration-[200ms]",
            "ease-[cubic-bezier(0.4,_0,_0.2,_1)]",
            "delay-[0ms]",
            "bg-[#18181b]",
            "text-[#ffffff]",
            "shadow-[0px_1px_2px_0px_rgba(0,0,0,0.05)]",
            "hover:bg-[#27272a]",
            "hover:border-[#3f3f46]",
            "active:text-[#d4d4d8]",
            "disabled:opacity-[0.5]",
            "disabled:cursor-not-allowed",
        ] {
            assert!(tokens.iter().any(|token| token == expected), "{expected}");
        }
        assert!(!tokens.iter().any(|token| token.starts_with("opacity-")));
        assert!(!tokens.iter().any(|token| token.starts_with("active:shadow-")));
        assert!(!tokens.iter().any(|token| token == "[&_svg]:stroke-current"));
    }

    #[test]
    fn disabled_shadow_layers_are_dropped_from_state_shadow_token() {
        let partial =
            edit::with_shadow_enabled(&ButtonConfig::default(), VisualState::Hover, 0, false);
        let partial_tokens = tokens(&partial);
        assert!(partial_tokens
            .iter()
            .any(|token| token == "hover:shadow-[0px_4px_6px_-1px_rgba(0,0,0,0.1)]"));

        let all_disabled = edit::with_shadow_enabled(&partial, VisualState::Hover, 1, false);
        assert_eq!(all_disabled.states.hover.shadows.len(), 2);
        let none_tokens = tokens(&all_disabled);
        assert!(none_tokens.iter().any(|token| token == "hover:shadow-[none]"));
        assert!(!none_tokens
            .iter()
            .any(|token| token.starts_with("hover:shadow-") && token.contains("rgba")));
    }

    #[test]
    fn gradient_background_spaces_become_underscores() {
        let config = edit::with_state(&ButtonConfig::default(), VisualState::Hover, |style| {
            style.background = BackgroundInfo::Gradient(Gradient::default());
        });
        let tokens = tokens(&config);
        assert!(tokens.iter().any(|token| {
            token == "hover:bg-[linear-gradient(135deg,_#18181b_0%,_#27272a_100%)]"
        }));
    }

    #[test]
    fn enabled_icon_adds_stroke_token() {
        let mut config = ButtonConfig::default();
        config.icon.enabled = true;
        let classes = utility_classes(&config);
        assert!(classes.ends_with(" [&_svg]:stroke-current"));
    }
}
