//! Navigation render pipeline.
//!
//! Sequences annotation, injection and inline styling for one rendered
//! navigation block:
//!
//! ```text
//! not core/navigation ──────────────► pass through
//! nothing configured ───────────────► pass through
//! otherwise: annotate? ─► inject? ─► style? ─► done
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::config::{MenuConfiguration, mobile_menu_attributes};
use super::css::generate_rules;
use super::inject::{CONTENT_CLASS, Injection, MOBILE_MENU_WRAPPER_CLASS, inject_mobile_menu};
use super::markup::{MOBILE_MENU_CLASS, annotate, inline_styles};
use crate::block::{BlockTypeRegistry, NAVIGATION_BLOCK, RenderedBlock};
use crate::host::RenderContext;
use crate::html::TagProcessor;
use crate::tap::{RenderFilter, TapRegistry};

/// Prefix of generated navigation element IDs.
pub const ID_PREFIX: &str = "nav-";

/// Handle of the page-level mobile menu stylesheet.
pub const DEFAULT_STYLESHEET_HANDLE: &str = "menudrawer-mobile-menu";

/// Weight at which the mobile menu taps are registered.
pub const DEFAULT_TAP_WEIGHT: i32 = 10;

/// Base CSS shared by every navigation carrying an injected menu.
///
/// While the menu is open only the injected menu is shown in place of the
/// default link list.
pub fn base_stylesheet() -> String {
    format!(
        ".wp-block-navigation.{MOBILE_MENU_CLASS} .wp-block-navigation__responsive-container.is-menu-open \
         .{CONTENT_CLASS} > :not(.{MOBILE_MENU_WRAPPER_CLASS}) {{ display: none; }}\n\
         .{MOBILE_MENU_WRAPPER_CLASS} {{ width: 100%; }}\n\
         .wp-block-navigation:not(.{MOBILE_MENU_CLASS}) .{MOBILE_MENU_WRAPPER_CLASS} {{ display: none; }}"
    )
}

/// What the pipeline did to one fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRender {
    /// The resulting markup.
    pub markup: String,
    /// ID assigned to the navigation root, when styles were inlined.
    pub element_id: Option<String>,
    /// Number of CSS rules emitted.
    pub rule_count: usize,
    /// Whether the mobile menu was injected.
    pub injected: bool,
}

impl NavigationRender {
    fn unchanged(markup: String) -> Self {
        Self {
            markup,
            element_id: None,
            rule_count: 0,
            injected: false,
        }
    }
}

/// Run the pipeline over one rendered navigation fragment.
pub fn process_navigation(
    markup: String,
    attributes: &Map<String, Value>,
    ctx: &RenderContext<'_>,
) -> NavigationRender {
    let config = MenuConfiguration::from_attributes(attributes);
    let flags = config.flags();
    if !flags.any() {
        return NavigationRender::unchanged(markup);
    }

    let mut markup = markup;
    let mut injected = false;

    if flags.has_mobile_menu {
        markup = annotate(TagProcessor::new(markup), &config, true);

        let (next, outcome) = inject_mobile_menu(markup, &config.slug, ctx.template_parts);
        markup = next;
        injected = outcome == Injection::Injected;
    }

    let mut element_id = None;
    let mut rule_count = 0;
    if flags.needs_styles() {
        let id = ctx.ids.next_id(ID_PREFIX);
        let rules = generate_rules(&config, &id, flags.has_mobile_menu);
        let (next, inlined) = inline_styles(markup, &rules, &id);
        markup = next;
        if inlined {
            rule_count = rules.len();
            element_id = Some(id);
        }
    }

    debug!(
        slug = %config.slug,
        injected,
        rules = rule_count,
        "navigation processed"
    );

    NavigationRender {
        markup,
        element_id,
        rule_count,
        injected,
    }
}

/// Render filter that adds mobile menus to navigation blocks.
#[derive(Debug, Clone)]
pub struct MobileMenuFilter {
    stylesheet_handle: String,
}

impl Default for MobileMenuFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET_HANDLE)
    }
}

impl MobileMenuFilter {
    /// Create a filter that registers its base CSS under `stylesheet_handle`.
    pub fn new(stylesheet_handle: &str) -> Self {
        Self {
            stylesheet_handle: stylesheet_handle.to_string(),
        }
    }

    /// Handle of the base stylesheet.
    pub fn stylesheet_handle(&self) -> &str {
        &self.stylesheet_handle
    }
}

impl RenderFilter for MobileMenuFilter {
    fn name(&self) -> &str {
        "mobile_menu"
    }

    fn filter(&self, block: &RenderedBlock, markup: String, ctx: &RenderContext<'_>) -> String {
        if !block.is(NAVIGATION_BLOCK) {
            return markup;
        }

        let render = process_navigation(markup, &block.attributes, ctx);
        if render.injected {
            ctx.styles
                .register_stylesheet(&self.stylesheet_handle, &base_stylesheet());
        }
        render.markup
    }
}

/// Extend the navigation block with the mobile menu attributes.
///
/// Does nothing when the navigation block is not registered.
pub fn register_attributes(blocks: &mut BlockTypeRegistry) {
    if blocks.extend_attributes(NAVIGATION_BLOCK, mobile_menu_attributes()) {
        info!(block = NAVIGATION_BLOCK, "mobile menu attributes registered");
    } else {
        debug!(block = NAVIGATION_BLOCK, "block type not registered, skipping attributes");
    }
}

/// Register the mobile menu init action and render filter.
pub fn register_taps(taps: &mut TapRegistry, weight: i32, filter: MobileMenuFilter) {
    taps.on_init("mobile_menu", weight, register_attributes);
    taps.on_render_block(weight, Arc::new(filter));
}
