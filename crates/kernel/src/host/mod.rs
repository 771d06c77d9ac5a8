//! Host services consumed by render-time plugins.
//!
//! Each capability is a narrow contract (trait or pure function) with a
//! default in-process implementation. Render filters receive them bundled in
//! a [`RenderContext`] rather than reaching for globals.

pub mod sanitize;
mod styles;
mod template_part;
mod unique_id;

pub use styles::StyleRegistry;
pub use template_part::{
    FsTemplatePartRenderer, StaticTemplateParts, TemplatePartRenderer, is_valid_slug,
};
pub use unique_id::{SequentialIdGenerator, UniqueIdGenerator};

/// Per-request host services handed to render filters.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Renders template parts by slug.
    pub template_parts: &'a dyn TemplatePartRenderer,
    /// Issues element IDs unique across the page.
    pub ids: &'a dyn UniqueIdGenerator,
    /// Collects page-level CSS.
    pub styles: &'a StyleRegistry,
}

impl<'a> RenderContext<'a> {
    /// Bundle host services for one page render.
    pub fn new(
        template_parts: &'a dyn TemplatePartRenderer,
        ids: &'a dyn UniqueIdGenerator,
        styles: &'a StyleRegistry,
    ) -> Self {
        Self {
            template_parts,
            ids,
            styles,
        }
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
