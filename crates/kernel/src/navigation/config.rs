//! Mobile menu attributes and the configuration derived from them.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::block::{AttributeDefinition, AttributeType};
use crate::host::sanitize::{absint, esc_attr, is_truthy, sanitize_html_class, sanitize_text_field};

/// Template part slug rendered inside the responsive container.
pub const ATTR_SLUG: &str = "mobileMenuSlug";
/// Preset color of the open mobile menu.
pub const ATTR_BACKGROUND: &str = "mobileMenuBackgroundColor";
/// Custom color of the open mobile menu.
pub const ATTR_CUSTOM_BACKGROUND: &str = "customMobileMenuBackgroundColor";
/// Preset background of the open/close toggles.
pub const ATTR_ICON_BACKGROUND: &str = "mobileIconBackgroundColor";
/// Custom background of the open/close toggles.
pub const ATTR_CUSTOM_ICON_BACKGROUND: &str = "customMobileIconBackgroundColor";
/// Preset fill of the toggle icons.
pub const ATTR_ICON_COLOR: &str = "mobileIconColor";
/// Custom fill of the toggle icons.
pub const ATTR_CUSTOM_ICON_COLOR: &str = "customMobileIconColor";
/// Whether the custom breakpoint is active.
pub const ATTR_HAS_BREAKPOINT: &str = "hasMobileBreakpoint";
/// Viewport width (px) below which the mobile menu is used.
pub const ATTR_BREAKPOINT: &str = "mobileBreakpoint";

/// Breakpoint used when none is supplied.
pub const DEFAULT_BREAKPOINT_PX: u32 = 600;

/// Attribute declarations added to the navigation block at startup.
pub fn mobile_menu_attributes() -> Vec<(String, AttributeDefinition)> {
    let string = |name: &str| {
        (
            name.to_string(),
            AttributeDefinition::with_default(AttributeType::String, Value::from("")),
        )
    };

    vec![
        string(ATTR_SLUG),
        string(ATTR_BACKGROUND),
        string(ATTR_CUSTOM_BACKGROUND),
        string(ATTR_ICON_BACKGROUND),
        string(ATTR_CUSTOM_ICON_BACKGROUND),
        string(ATTR_ICON_COLOR),
        string(ATTR_CUSTOM_ICON_COLOR),
        (
            ATTR_HAS_BREAKPOINT.to_string(),
            AttributeDefinition::with_default(AttributeType::Boolean, Value::from(false)),
        ),
        (
            ATTR_BREAKPOINT.to_string(),
            AttributeDefinition::with_default(
                AttributeType::Number,
                Value::from(DEFAULT_BREAKPOINT_PX),
            ),
        ),
    ]
}

/// Normalized mobile menu settings for one navigation render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuConfiguration {
    pub slug: String,
    pub background_color: String,
    pub icon_background_color: String,
    pub icon_color: String,
    pub breakpoint_enabled: bool,
    pub breakpoint_px: u32,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            slug: String::new(),
            background_color: String::new(),
            icon_background_color: String::new(),
            icon_color: String::new(),
            breakpoint_enabled: false,
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

impl MenuConfiguration {
    /// Extract the configuration from raw block attributes.
    ///
    /// Never fails: missing or malformed values fall back to defaults.
    pub fn from_attributes(attrs: &Map<String, Value>) -> Self {
        let slug = non_empty_str(attrs, ATTR_SLUG)
            .map(esc_attr)
            .unwrap_or_default();

        let breakpoint_px = match attrs.get(ATTR_BREAKPOINT) {
            None | Some(Value::Null) => DEFAULT_BREAKPOINT_PX,
            Some(value) => absint(value),
        };

        Self {
            slug,
            background_color: resolve_color(attrs, ATTR_BACKGROUND, ATTR_CUSTOM_BACKGROUND),
            icon_background_color: resolve_color(
                attrs,
                ATTR_ICON_BACKGROUND,
                ATTR_CUSTOM_ICON_BACKGROUND,
            ),
            icon_color: resolve_color(attrs, ATTR_ICON_COLOR, ATTR_CUSTOM_ICON_COLOR),
            breakpoint_enabled: attrs.get(ATTR_HAS_BREAKPOINT).is_some_and(is_truthy),
            breakpoint_px,
        }
    }

    /// A template part should be injected.
    pub fn has_mobile_menu(&self) -> bool {
        !self.slug.is_empty()
    }

    /// The breakpoint media query should be emitted.
    pub fn has_breakpoint(&self) -> bool {
        self.breakpoint_enabled && self.breakpoint_px > 0
    }

    /// At least one color rule would be emitted.
    pub fn has_colors(&self) -> bool {
        !self.icon_background_color.is_empty()
            || !self.icon_color.is_empty()
            || (!self.background_color.is_empty() && self.has_mobile_menu())
    }

    /// Derived feature flags.
    pub fn flags(&self) -> FeatureFlags {
        FeatureFlags {
            has_mobile_menu: self.has_mobile_menu(),
            has_breakpoint: self.has_breakpoint(),
            has_colors: self.has_colors(),
        }
    }
}

/// Which pipeline stages a configuration needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeatureFlags {
    pub has_mobile_menu: bool,
    pub has_breakpoint: bool,
    pub has_colors: bool,
}

impl FeatureFlags {
    /// Anything to do at all.
    pub fn any(self) -> bool {
        self.has_mobile_menu || self.has_breakpoint || self.has_colors
    }

    /// Inline styles are needed.
    pub fn needs_styles(self) -> bool {
        self.has_colors || self.has_breakpoint
    }
}

fn non_empty_str<'a>(attrs: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    attrs
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Preset name wins over a custom literal; neither yields an empty string.
fn resolve_color(attrs: &Map<String, Value>, preset_key: &str, custom_key: &str) -> String {
    if let Some(preset) = non_empty_str(attrs, preset_key) {
        return format!(
            "var(--wp--preset--color--{})",
            sanitize_html_class(preset)
        );
    }
    non_empty_str(attrs, custom_key)
        .map(sanitize_text_field)
        .unwrap_or_default()
}
