//! Mobile menu support for the navigation block.
//!
//! This module provides:
//! - MenuConfiguration: normalized mobile menu settings from block attributes
//! - CSS generation scoped to one navigation instance
//! - Markup annotation, template part injection and inline styles
//! - MobileMenuFilter: the render filter sequencing all of the above

mod config;
mod css;
mod inject;
mod markup;
mod pipeline;

pub use config::{
    ATTR_BACKGROUND, ATTR_BREAKPOINT, ATTR_CUSTOM_BACKGROUND, ATTR_CUSTOM_ICON_BACKGROUND,
    ATTR_CUSTOM_ICON_COLOR, ATTR_HAS_BREAKPOINT, ATTR_ICON_BACKGROUND, ATTR_ICON_COLOR, ATTR_SLUG,
    DEFAULT_BREAKPOINT_PX, FeatureFlags, MenuConfiguration, mobile_menu_attributes,
};
pub use css::generate_rules;
pub use inject::{
    CONTENT_CLASS, Injection, MOBILE_MENU_MARKER, MOBILE_MENU_WRAPPER_CLASS, inject_mobile_menu,
};
pub use markup::{MOBILE_MENU_CLASS, NAVIGATION_TAG, annotate, inline_styles};
pub use pipeline::{
    DEFAULT_STYLESHEET_HANDLE, DEFAULT_TAP_WEIGHT, ID_PREFIX, MobileMenuFilter, NavigationRender,
    base_stylesheet, process_navigation, register_attributes, register_taps,
};
