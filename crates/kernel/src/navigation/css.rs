//! Scoped CSS for a single navigation instance.
//!
//! Every selector is anchored on the navigation element's generated ID so
//! that several navigation blocks on one page never style each other.

use super::config::MenuConfiguration;
use crate::host::sanitize::esc_attr;

const OPEN_TOGGLE: &str = ".wp-block-navigation__responsive-container-open";
const CLOSE_TOGGLE: &str = ".wp-block-navigation__responsive-container-close";
const CONTAINER: &str = ".wp-block-navigation__responsive-container";

/// Build the ordered list of CSS rules for `config`.
///
/// `element_id` is the ID assigned to the navigation root; `has_mobile_menu`
/// gates the menu background rule, which has no effect without an injected
/// menu.
pub fn generate_rules(
    config: &MenuConfiguration,
    element_id: &str,
    has_mobile_menu: bool,
) -> Vec<String> {
    let id = esc_attr(element_id);
    let mut rules = Vec::new();

    if config.breakpoint_enabled && config.breakpoint_px > 0 {
        let max_width = config.breakpoint_px.saturating_sub(1);
        rules.push(format!(
            "@media (max-width: {max_width}px) {{ \
             #{id} {OPEN_TOGGLE} {{ display: flex !important; }} \
             #{id} {CONTAINER}:not(.is-menu-open) {{ display: none !important; }} \
             }}"
        ));
    }

    if !config.background_color.is_empty() && has_mobile_menu {
        rules.push(format!(
            "#{id} {CONTAINER}.is-menu-open {{ background-color: {} !important; }}",
            esc_attr(&config.background_color)
        ));
    }

    if !config.icon_background_color.is_empty() {
        rules.push(format!(
            "#{id} {OPEN_TOGGLE}, #{id} {CLOSE_TOGGLE} {{ background-color: {}; }}",
            esc_attr(&config.icon_background_color)
        ));
    }

    if !config.icon_color.is_empty() {
        rules.push(format!(
            "#{id} {OPEN_TOGGLE} svg, #{id} {CLOSE_TOGGLE} svg {{ fill: {}; }}",
            esc_attr(&config.icon_color)
        ));
    }

    rules
}
