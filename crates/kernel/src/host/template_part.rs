//! Template part rendering.
//!
//! A template part is a named fragment of site markup that can be rendered
//! on demand by slug. The pipeline only needs "slug in, HTML out" and treats
//! an empty string as "nothing to render".

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{NavError, NavResult};

/// Renders a template part by slug.
pub trait TemplatePartRenderer: Send + Sync {
    /// Render the part. Returns an empty string when the slug is unresolvable.
    fn render(&self, slug: &str) -> String;
}

/// Check that a slug is safe to use as a file stem.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Loads template parts from `<dir>/<slug>.html`.
#[derive(Debug, Clone)]
pub struct FsTemplatePartRenderer {
    dir: PathBuf,
    extension: String,
}

impl FsTemplatePartRenderer {
    /// Create a renderer rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: "html".to_string(),
        }
    }

    /// Use a different file extension (default: `html`).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Directory template parts are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve and read the part for `slug`.
    pub fn load(&self, slug: &str) -> NavResult<String> {
        if !is_valid_slug(slug) {
            return Err(NavError::InvalidSlug(slug.to_string()));
        }

        let path = self.dir.join(format!("{slug}.{}", self.extension));
        std::fs::read_to_string(&path).map_err(|source| NavError::TemplatePart {
            slug: slug.to_string(),
            path,
            source,
        })
    }
}

impl TemplatePartRenderer for FsTemplatePartRenderer {
    fn render(&self, slug: &str) -> String {
        match self.load(slug) {
            Ok(html) => {
                debug!(slug = %slug, bytes = html.len(), "rendered template part");
                html
            }
            Err(e) => {
                warn!(slug = %slug, error = %e, "template part unavailable");
                String::new()
            }
        }
    }
}

/// In-memory template parts keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateParts {
    parts: HashMap<String, String>,
}

impl StaticTemplateParts {
    /// Create an empty set of parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part.
    pub fn with_part(mut self, slug: &str, html: &str) -> Self {
        self.parts.insert(slug.to_string(), html.to_string());
        self
    }

    /// Number of registered parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if no parts are registered.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl TemplatePartRenderer for StaticTemplateParts {
    fn render(&self, slug: &str) -> String {
        self.parts.get(slug).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn temp_parts_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "menudrawer-parts-{name}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("mobile-menu"));
        assert!(is_valid_slug("menu_2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("../etc/passwd"));
        assert!(!is_valid_slug("a b"));
    }

    #[test]
    fn fs_renderer_reads_part() {
        let dir = temp_parts_dir("read");
        std::fs::write(dir.join("mobile-menu.html"), "<ul><li>Home</li></ul>").unwrap();

        let renderer = FsTemplatePartRenderer::new(&dir);
        assert_eq!(renderer.render("mobile-menu"), "<ul><li>Home</li></ul>");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn fs_renderer_missing_part_is_empty() {
        let dir = temp_parts_dir("missing");
        let renderer = FsTemplatePartRenderer::new(&dir);

        assert!(renderer.render("nope").is_empty());
        assert!(matches!(
            renderer.load("nope"),
            Err(NavError::TemplatePart { .. })
        ));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn fs_renderer_rejects_traversal() {
        let renderer = FsTemplatePartRenderer::new("/tmp");
        assert!(matches!(
            renderer.load("../secret"),
            Err(NavError::InvalidSlug(_))
        ));
        assert!(renderer.render("../secret").is_empty());
    }

    #[test]
    fn fs_renderer_custom_extension() {
        let dir = temp_parts_dir("ext");
        std::fs::write(dir.join("menu.part"), "<p>hi</p>").unwrap();

        let renderer = FsTemplatePartRenderer::new(&dir).with_extension(".part");
        assert_eq!(renderer.render("menu"), "<p>hi</p>");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn static_parts_lookup() {
        let parts = StaticTemplateParts::new().with_part("menu", "<p>menu</p>");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts.render("menu"), "<p>menu</p>");
        assert_eq!(parts.render("other"), "");
    }
}
