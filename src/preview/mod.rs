use crate::export::BASE_SELECTOR;

pub const DEFAULT_PREVIEW_ELEMENT_ID: &str = "preview-button";

/// Rewrites every base-class selector in `css` to target the element with
/// `element_id`, so the stylesheet can be injected next to other buttons
/// without leaking onto them.
pub fn scope_stylesheet(css: &str, element_id: &str) -> String {
    let target = format!("#{element_id}");
    let mut scoped = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(index) = rest.find(BASE_SELECTOR) {
        let after = &rest[index + BASE_SELECTOR.len()..];
        scoped.push_str(&rest[..index]);
        // `.btn` only, never a longer class such as `.btn-group`
        if after.starts_with(is_class_name_char) {
            scoped.push_str(BASE_SELECTOR);
        } else {
            scoped.push_str(&target);
        }
        rest = after;
    }
    scoped.push_str(rest);
    scoped
}

fn is_class_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}
