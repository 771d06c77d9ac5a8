//! Splices the rendered mobile menu into the responsive container.
//!
//! The target is the first `div` whose class list contains
//! [`CONTENT_CLASS`] and which carries an `id`. Attributes may appear in any
//! order. The menu is inserted as the first child of that container.

use tracing::debug;

use crate::host::TemplatePartRenderer;
use crate::html::TagProcessor;

/// Class of the responsive container's content wrapper.
pub const CONTENT_CLASS: &str = "wp-block-navigation__responsive-container-content";

/// Class of the wrapper around the injected menu.
pub const MOBILE_MENU_WRAPPER_CLASS: &str = "wp-block-navigation__mobile-menu";

/// Marker attribute on the injected wrapper.
pub const MOBILE_MENU_MARKER: &str = "data-mobile-menu";

/// Outcome of an injection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// The menu was inserted.
    Injected,
    /// No responsive container content wrapper was found.
    NoTarget,
    /// The container already starts with an injected menu.
    AlreadyInjected,
    /// The template part rendered nothing.
    EmptyPart,
}

/// Inject the template part `slug` into the responsive container of `markup`.
pub fn inject_mobile_menu(
    markup: String,
    slug: &str,
    renderer: &dyn TemplatePartRenderer,
) -> (String, Injection) {
    let Some(insert_at) = find_content_container(&markup) else {
        debug!(slug = %slug, "responsive container not found, skipping injection");
        return (markup, Injection::NoTarget);
    };

    if starts_with_injected_menu(&markup[insert_at..]) {
        debug!(slug = %slug, "mobile menu already present, skipping injection");
        return (markup, Injection::AlreadyInjected);
    }

    let rendered = renderer.render(slug);
    if rendered.trim().is_empty() {
        debug!(slug = %slug, "template part rendered empty, skipping injection");
        return (markup, Injection::EmptyPart);
    }

    let wrapper = format!(
        "<div class=\"{MOBILE_MENU_WRAPPER_CLASS}\" {MOBILE_MENU_MARKER}=\"true\">{rendered}</div>"
    );
    let mut out = String::with_capacity(markup.len() + wrapper.len());
    out.push_str(&markup[..insert_at]);
    out.push_str(&wrapper);
    out.push_str(&markup[insert_at..]);
    (out, Injection::Injected)
}

/// Byte offset just past the opening tag of the first content container.
fn find_content_container(markup: &str) -> Option<usize> {
    let mut processor = TagProcessor::new(markup);
    while processor.next_tag("div") {
        if processor.has_class(CONTENT_CLASS) && processor.get_attribute("id").is_some() {
            return processor.tag_end();
        }
    }
    None
}

/// Whether the first tag of `content` is an injected menu wrapper.
fn starts_with_injected_menu(content: &str) -> bool {
    let trimmed = content.trim_start();
    let mut processor = TagProcessor::new(trimmed);
    processor.next_tag("div")
        && processor.tag_start() == Some(0)
        && processor.get_attribute(MOBILE_MENU_MARKER) == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticTemplateParts;

    const NAV: &str = concat!(
        r#"<nav class="wp-block-navigation">"#,
        r#"<div class="wp-block-navigation__responsive-container" id="modal-1">"#,
        r#"<div class="wp-block-navigation__responsive-container-content" id="modal-1-content">"#,
        r#"<ul class="wp-block-navigation__container"></ul>"#,
        "</div></div></nav>"
    );

    fn parts() -> StaticTemplateParts {
        StaticTemplateParts::new()
            .with_part("mobile-menu", "<p>Mobile</p>")
            .with_part("empty-menu", "")
            .with_part("blank-menu", "  \n ")
    }

    #[test]
    fn injects_as_first_child() {
        let (out, result) = inject_mobile_menu(NAV.to_string(), "mobile-menu", &parts());
        assert_eq!(result, Injection::Injected);
        assert!(out.contains(concat!(
            r#"id="modal-1-content">"#,
            r#"<div class="wp-block-navigation__mobile-menu" data-mobile-menu="true"><p>Mobile</p></div>"#,
            r#"<ul class="wp-block-navigation__container">"#
        )));
    }

    #[test]
    fn attribute_order_does_not_matter() {
        let html = r#"<div id="m-content" data-x="1" class="foo wp-block-navigation__responsive-container-content"></div>"#;
        let (out, result) = inject_mobile_menu(html.to_string(), "mobile-menu", &parts());
        assert_eq!(result, Injection::Injected);
        assert!(out.ends_with(r#"data-mobile-menu="true"><p>Mobile</p></div></div>"#));
    }

    #[test]
    fn container_without_id_is_not_a_target() {
        let html = r#"<div class="wp-block-navigation__responsive-container-content"></div>"#;
        let (out, result) = inject_mobile_menu(html.to_string(), "mobile-menu", &parts());
        assert_eq!(result, Injection::NoTarget);
        assert_eq!(out, html);
    }

    #[test]
    fn missing_container_is_noop() {
        let html = r#"<nav class="wp-block-navigation"><ul></ul></nav>"#;
        let (out, result) = inject_mobile_menu(html.to_string(), "mobile-menu", &parts());
        assert_eq!(result, Injection::NoTarget);
        assert_eq!(out, html);
    }

    #[test]
    fn empty_part_is_not_injected() {
        for slug in ["empty-menu", "blank-menu", "unknown"] {
            let (out, result) = inject_mobile_menu(NAV.to_string(), slug, &parts());
            assert_eq!(result, Injection::EmptyPart);
            assert_eq!(out, NAV);
            assert!(!out.contains(MOBILE_MENU_MARKER));
        }
    }

    #[test]
    fn only_first_container_receives_menu() {
        let html = format!("{NAV}{NAV}");
        let (out, _) = inject_mobile_menu(html, "mobile-menu", &parts());
        assert_eq!(out.matches(MOBILE_MENU_MARKER).count(), 1);
    }

    #[test]
    fn second_pass_does_not_double_inject() {
        let (once, _) = inject_mobile_menu(NAV.to_string(), "mobile-menu", &parts());
        let (twice, result) = inject_mobile_menu(once.clone(), "mobile-menu", &parts());
        assert_eq!(result, Injection::AlreadyInjected);
        assert_eq!(twice, once);
    }
}
