//! Page-scoped style registration.
//!
//! Stylesheets are registered under a handle. A handle's base CSS is stored
//! once; inline CSS attached to the handle is appended in call order.
//! `render` emits one `<style>` element per handle in registration order.

use parking_lot::Mutex;
use tracing::debug;

use super::sanitize::esc_attr;

#[derive(Debug, Clone)]
struct Stylesheet {
    handle: String,
    base: String,
    inline: Vec<String>,
}

/// Request-scoped sink for CSS emitted once per page.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    sheets: Mutex<Vec<Stylesheet>>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base stylesheet. Returns false if the handle already exists.
    pub fn register_stylesheet(&self, handle: &str, css: &str) -> bool {
        let mut sheets = self.sheets.lock();
        if sheets.iter().any(|s| s.handle == handle) {
            return false;
        }
        debug!(handle = %handle, "registered stylesheet");
        sheets.push(Stylesheet {
            handle: handle.to_string(),
            base: css.to_string(),
            inline: Vec::new(),
        });
        true
    }

    /// Attach inline CSS to a handle, creating an empty base if needed.
    pub fn add_inline_style(&self, handle: &str, css: &str) {
        let mut sheets = self.sheets.lock();
        match sheets.iter_mut().find(|s| s.handle == handle) {
            Some(sheet) => sheet.inline.push(css.to_string()),
            None => sheets.push(Stylesheet {
                handle: handle.to_string(),
                base: String::new(),
                inline: vec![css.to_string()],
            }),
        }
    }

    /// Check whether a handle has been registered.
    pub fn is_registered(&self, handle: &str) -> bool {
        self.sheets.lock().iter().any(|s| s.handle == handle)
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.sheets.lock().len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.sheets.lock().is_empty()
    }

    /// Render all stylesheets as `<style>` elements.
    pub fn render(&self) -> String {
        let sheets = self.sheets.lock();
        let mut html = String::new();
        for sheet in sheets.iter() {
            let body: Vec<&str> = std::iter::once(sheet.base.as_str())
                .chain(sheet.inline.iter().map(String::as_str))
                .filter(|css| !css.is_empty())
                .collect();
            if body.is_empty() {
                continue;
            }
            html.push_str(&format!(
                "<style id=\"{}-css\">{}</style>\n",
                esc_attr(&sheet.handle),
                body.join("\n")
            ));
        }
        html
    }
}
