//! Menudrawer test utilities.
//!
//! Helpers for integration testing: navigation markup fixtures, an attribute
//! builder and an in-memory host for render filters.

use menudrawer_kernel::block::{NAVIGATION_BLOCK, RenderedBlock};
use menudrawer_kernel::host::{
    RenderContext, SequentialIdGenerator, StaticTemplateParts, StyleRegistry,
};
use serde_json::{Map, Value as JsonValue};

/// Markup of a navigation block as the core renderer produces it.
pub fn navigation_markup() -> String {
    navigation_markup_with_modal("modal-1")
}

/// Navigation markup whose responsive container uses `modal_id`.
pub fn navigation_markup_with_modal(modal_id: &str) -> String {
    format!(
        concat!(
            r#"<nav class="is-responsive items-justified-right wp-block-navigation is-layout-flex" aria-label="Main">"#,
            r#"<button aria-haspopup="dialog" aria-label="Open menu" class="wp-block-navigation__responsive-container-open">"#,
            r#"<svg width="24" height="24" viewBox="0 0 24 24"><path d="M5 5v1.5h14V5H5z"></path></svg></button>"#,
            r#"<div class="wp-block-navigation__responsive-container" id="{id}">"#,
            r#"<div class="wp-block-navigation__responsive-close" tabindex="-1">"#,
            r#"<div class="wp-block-navigation__responsive-dialog" aria-label="Menu">"#,
            r#"<button aria-label="Close menu" class="wp-block-navigation__responsive-container-close">"#,
            r#"<svg width="24" height="24" viewBox="0 0 24 24"><path d="M13 11.8l6.1-6.3-1-1-6.1 6.2-6.1-6.2-1 1 6.1 6.3-6.5 6.7 1 1 6.5-6.6 6.5 6.6 1-1z"></path></svg></button>"#,
            r#"<div class="wp-block-navigation__responsive-container-content" id="{id}-content">"#,
            r#"<ul class="wp-block-navigation__container"><li class="wp-block-navigation-item"><a href="/">Home</a></li></ul>"#,
            "</div></div></div></div></nav>"
        ),
        id = modal_id
    )
}

/// Builder for navigation block attributes.
#[derive(Debug, Clone, Default)]
pub struct TestNavigation {
    attrs: Map<String, JsonValue>,
}

/// Start building navigation attributes.
pub fn test_navigation() -> TestNavigation {
    TestNavigation::default()
}

impl TestNavigation {
    /// Set an arbitrary attribute.
    pub fn with(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    /// Set the mobile menu template part slug.
    pub fn slug(self, slug: &str) -> Self {
        self.with("mobileMenuSlug", slug)
    }

    /// Set a preset menu background.
    pub fn preset_background(self, preset: &str) -> Self {
        self.with("mobileMenuBackgroundColor", preset)
    }

    /// Set a custom menu background.
    pub fn custom_background(self, color: &str) -> Self {
        self.with("customMobileMenuBackgroundColor", color)
    }

    /// Set a preset icon background.
    pub fn preset_icon_background(self, preset: &str) -> Self {
        self.with("mobileIconBackgroundColor", preset)
    }

    /// Set a custom icon color.
    pub fn custom_icon_color(self, color: &str) -> Self {
        self.with("customMobileIconColor", color)
    }

    /// Enable the breakpoint at `px`.
    pub fn breakpoint(self, px: u32) -> Self {
        self.with("hasMobileBreakpoint", true)
            .with("mobileBreakpoint", px)
    }

    /// The attribute map.
    pub fn attributes(&self) -> &Map<String, JsonValue> {
        &self.attrs
    }

    /// A navigation block instance with these attributes.
    pub fn block(&self) -> RenderedBlock {
        RenderedBlock::new(NAVIGATION_BLOCK, self.attrs.clone())
    }
}

/// In-memory host services for one page render.
#[derive(Debug, Default)]
pub struct TestHost {
    pub parts: StaticTemplateParts,
    pub ids: SequentialIdGenerator,
    pub styles: StyleRegistry,
}

impl TestHost {
    /// Host with no template parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template part.
    pub fn with_part(mut self, slug: &str, html: &str) -> Self {
        self.parts = self.parts.with_part(slug, html);
        self
    }

    /// Render context borrowing this host.
    pub fn ctx(&self) -> RenderContext<'_> {
        RenderContext::new(&self.parts, &self.ids, &self.styles)
    }
}

/// Assert that `haystack` contains `needle` exactly `expected` times.
pub fn assert_occurrences(haystack: &str, needle: &str, expected: usize) {
    let actual = haystack.matches(needle).count();
    assert_eq!(
        actual, expected,
        "expected {expected} occurrence(s) of {needle:?}, found {actual} in:\n{haystack}"
    );
}
