//! Annotation of the navigation root and inline style emission.

use tracing::debug;

use super::config::MenuConfiguration;
use crate::html::TagProcessor;

/// Tag name of the navigation root element.
pub const NAVIGATION_TAG: &str = "nav";

/// Class added to navigation roots that carry a mobile menu.
pub const MOBILE_MENU_CLASS: &str = "has-mobile-menu";

/// Mark the navigation root as carrying a mobile menu.
///
/// No-op unless `has_mobile_menu` is set and a `<nav>` tag exists.
pub fn annotate(
    mut processor: TagProcessor,
    config: &MenuConfiguration,
    has_mobile_menu: bool,
) -> String {
    if !has_mobile_menu || !processor.next_tag(NAVIGATION_TAG) {
        return processor.into_html();
    }

    processor.set_attribute("data-mobile-menu-slug", &config.slug);
    processor.add_class(MOBILE_MENU_CLASS);
    processor.set_attribute("data-responsive-navigation", "true");
    if !config.background_color.is_empty() {
        processor.set_attribute("data-mobile-menu-background", &config.background_color);
    }

    processor.into_html()
}

/// Assign `element_id` to the navigation root and prepend a scoped `<style>`.
///
/// Returns the markup and whether styles were inlined. Nothing changes when
/// `rules` is empty or the fragment has no `<nav>` tag.
pub fn inline_styles(markup: String, rules: &[String], element_id: &str) -> (String, bool) {
    if rules.is_empty() {
        return (markup, false);
    }

    let mut processor = TagProcessor::new(markup);
    if !processor.next_tag(NAVIGATION_TAG) {
        debug!("no navigation root found, skipping inline styles");
        return (processor.into_html(), false);
    }
    processor.set_attribute("id", element_id);

    let styled = format!("<style>{}</style>{}", rules.join(" "), processor.into_html());
    (styled, true)
}
