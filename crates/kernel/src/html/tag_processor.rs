//! Forward-only HTML tag processor.
//!
//! Walks opening tags in a fragment, lets the caller inspect and mutate the
//! attributes of the current tag, and serializes the (possibly modified)
//! markup back to text. Only the tags that are mutated are rewritten; all
//! other bytes are preserved exactly.
//!
//! This is not a parser: it does not build a tree and assumes the regions it
//! touches are well-formed. Comments, closing tags and the bodies of
//! `<script>`/`<style>` elements are skipped while scanning.

use std::sync::LazyLock;

use regex::Regex;

use crate::host::sanitize::esc_attr;

/// An opening tag anchored at the start of the input.
#[allow(clippy::expect_used)]
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^<([a-zA-Z][a-zA-Z0-9:-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    )
    .expect("valid regex literal")
});

/// A single attribute inside an opening tag.
#[allow(clippy::expect_used)]
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid regex literal")
});

#[derive(Debug, Clone)]
struct Attribute {
    name: String,
    /// Raw (still escaped) value; `None` for boolean attributes.
    value: Option<String>,
}

#[derive(Debug, Clone)]
struct OpenTag {
    start: usize,
    end: usize,
    name: String,
    attributes: Vec<Attribute>,
    self_closing: bool,
}

impl OpenTag {
    fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    fn serialize(&self) -> String {
        let mut out = format!("<{}", self.name);
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => out.push_str(&format!(" {}=\"{}\"", attr.name, value)),
                None => out.push_str(&format!(" {}", attr.name)),
            }
        }
        if self.self_closing {
            out.push_str(" /");
        }
        out.push('>');
        out
    }
}

/// Cursor over the opening tags of an HTML fragment.
#[derive(Debug, Clone)]
pub struct TagProcessor {
    html: String,
    cursor: usize,
    current: Option<OpenTag>,
}

impl TagProcessor {
    /// Create a processor positioned before the first tag.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            cursor: 0,
            current: None,
        }
    }

    /// Advance to the next opening tag named `name` (case-insensitive).
    ///
    /// Returns false, and clears the current tag, when none remains.
    pub fn next_tag(&mut self, name: &str) -> bool {
        self.advance(Some(name))
    }

    /// Advance to the next opening tag of any name.
    pub fn next_any_tag(&mut self) -> bool {
        self.advance(None)
    }

    fn advance(&mut self, wanted: Option<&str>) -> bool {
        self.current = None;
        let mut pos = self.cursor;

        while let Some(offset) = self.html[pos..].find('<') {
            let start = pos + offset;
            let rest = &self.html[start..];

            if rest.starts_with("<!--") {
                pos = match rest.find("-->") {
                    Some(close) => start + close + 3,
                    None => self.html.len(),
                };
                continue;
            }

            let Some(tag) = parse_open_tag(rest, start) else {
                pos = start + 1;
                continue;
            };

            let matches = wanted.is_none_or(|name| tag.name.eq_ignore_ascii_case(name));
            if matches {
                self.cursor = tag.end;
                self.current = Some(tag);
                return true;
            }

            pos = skip_raw_text(&self.html, &tag);
        }

        self.cursor = self.html.len();
        false
    }

    /// Name of the current tag, as written.
    pub fn tag_name(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.name.as_str())
    }

    /// Byte offset of the current tag's `<`.
    pub fn tag_start(&self) -> Option<usize> {
        self.current.as_ref().map(|t| t.start)
    }

    /// Byte offset just past the current tag's `>`.
    pub fn tag_end(&self) -> Option<usize> {
        self.current.as_ref().map(|t| t.end)
    }

    /// Raw value of an attribute on the current tag.
    ///
    /// Boolean attributes yield an empty string.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        let attr = self.current.as_ref()?.attribute(name)?;
        Some(attr.value.as_deref().unwrap_or(""))
    }

    /// Check whether the current tag's class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Set an attribute on the current tag. The value is attribute-escaped.
    ///
    /// Returns false when there is no current tag.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let Some(tag) = self.current.as_mut() else {
            return false;
        };

        let escaped = esc_attr(value);
        match tag
            .attributes
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(attr) => attr.value = Some(escaped),
            None => tag.attributes.push(Attribute {
                name: name.to_string(),
                value: Some(escaped),
            }),
        }
        self.rewrite_current();
        true
    }

    /// Add a class to the current tag if it is not already present.
    ///
    /// Returns false when there is no current tag.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.current.is_none() {
            return false;
        }
        if self.has_class(class) {
            return true;
        }

        let classes = match self.get_attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {class}", existing.trim())
            }
            _ => class.to_string(),
        };
        self.set_attribute("class", &classes)
    }

    fn rewrite_current(&mut self) {
        let Some(tag) = self.current.as_mut() else {
            return;
        };
        let serialized = tag.serialize();
        self.html.replace_range(tag.start..tag.end, &serialized);
        tag.end = tag.start + serialized.len();
        self.cursor = tag.end;
    }

    /// Borrow the markup including any mutations so far.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Serialize the markup including any mutations.
    pub fn into_html(self) -> String {
        self.html
    }
}

fn parse_open_tag(input: &str, offset: usize) -> Option<OpenTag> {
    let caps = OPEN_TAG.captures(input)?;
    let whole = caps.get(0)?;
    let name = caps.get(1)?.as_str().to_string();
    let raw_attributes = caps.get(2).map_or("", |m| m.as_str());
    let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());

    let attributes = ATTRIBUTE
        .captures_iter(raw_attributes)
        .filter_map(|c| {
            let name = c.get(1)?.as_str().to_string();
            let value = if let Some(v) = c.get(2) {
                Some(v.as_str().to_string())
            } else if let Some(v) = c.get(3) {
                Some(v.as_str().replace('"', "&quot;"))
            } else {
                c.get(4).map(|v| v.as_str().to_string())
            };
            Some(Attribute { name, value })
        })
        .collect();

    Some(OpenTag {
        start: offset,
        end: offset + whole.end(),
        name,
        attributes,
        self_closing,
    })
}

/// Position to resume scanning after `tag`, skipping raw-text element bodies.
fn skip_raw_text(html: &str, tag: &OpenTag) -> usize {
    let is_raw = ["script", "style"]
        .iter()
        .any(|raw| tag.name.eq_ignore_ascii_case(raw));
    if !is_raw || tag.self_closing {
        return tag.end;
    }

    let closing = format!("</{}", tag.name.to_ascii_lowercase());
    html[tag.end..]
        .to_ascii_lowercase()
        .find(&closing)
        .map_or(html.len(), |idx| tag.end + idx)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn finds_tags_by_name() {
        let mut p = TagProcessor::new(r#"<div><nav class="a">x</nav><nav id="b"></nav></div>"#);
        assert!(p.next_tag("nav"));
        assert_eq!(p.get_attribute("class"), Some("a"));
        assert!(p.next_tag("nav"));
        assert_eq!(p.get_attribute("id"), Some("b"));
        assert!(!p.next_tag("nav"));
        assert_eq!(p.tag_name(), None);
    }

    #[test]
    fn tag_names_match_case_insensitively() {
        let mut p = TagProcessor::new("<NAV Class=\"x\"></NAV>");
        assert!(p.next_tag("nav"));
        assert_eq!(p.tag_name(), Some("NAV"));
        assert_eq!(p.get_attribute("class"), Some("x"));
    }

    #[test]
    fn untouched_markup_round_trips_exactly() {
        let html = "<nav  class='a b'   data-x=1 hidden>\n<!-- c --></nav>";
        let mut p = TagProcessor::new(html);
        assert!(p.next_tag("nav"));
        assert_eq!(p.into_html(), html);
    }

    #[test]
    fn skips_comments_and_closing_tags() {
        let mut p = TagProcessor::new("<!-- <nav id=\"hidden\"> --></nav><nav id=\"real\">");
        assert!(p.next_tag("nav"));
        assert_eq!(p.get_attribute("id"), Some("real"));
    }

    #[test]
    fn skips_style_bodies() {
        let mut p = TagProcessor::new("<style>a > b { color: red }</style><div id=\"x\"></div>");
        assert!(p.next_tag("div"));
        assert_eq!(p.get_attribute("id"), Some("x"));
    }

    #[test]
    fn set_attribute_replaces_and_appends() {
        let mut p = TagProcessor::new(r#"<nav id="old" class="wp-block-navigation">"#);
        assert!(p.next_tag("nav"));
        assert!(p.set_attribute("id", "nav-1"));
        assert!(p.set_attribute("data-slug", "a\"b"));
        assert_eq!(
            p.into_html(),
            r#"<nav id="nav-1" class="wp-block-navigation" data-slug="a&quot;b">"#
        );
    }

    #[test]
    fn add_class_is_idempotent() {
        let mut p = TagProcessor::new(r#"<nav class="one">"#);
        assert!(p.next_tag("nav"));
        assert!(p.add_class("two"));
        assert!(p.add_class("two"));
        assert!(p.has_class("one"));
        assert!(p.has_class("two"));
        assert_eq!(p.into_html(), r#"<nav class="one two">"#);
    }

    #[test]
    fn add_class_without_existing_attribute() {
        let mut p = TagProcessor::new("<nav>");
        assert!(p.next_tag("nav"));
        assert!(p.add_class("has-mobile-menu"));
        assert_eq!(p.into_html(), r#"<nav class="has-mobile-menu">"#);
    }

    #[test]
    fn mutations_without_current_tag_are_rejected() {
        let mut p = TagProcessor::new("<p>no nav</p>");
        assert!(!p.next_tag("nav"));
        assert!(!p.set_attribute("id", "x"));
        assert!(!p.add_class("x"));
        assert_eq!(p.into_html(), "<p>no nav</p>");
    }

    #[test]
    fn single_quoted_values_are_requoted_on_rewrite() {
        let mut p = TagProcessor::new(r#"<div title='say "hi"'>"#);
        assert!(p.next_tag("div"));
        p.set_attribute("id", "d");
        assert_eq!(
            p.into_html(),
            r#"<div title="say &quot;hi&quot;" id="d">"#
        );
    }

    #[test]
    fn offsets_track_rewrites() {
        let mut p = TagProcessor::new(r#"<div class="c"><span></span></div>"#);
        assert!(p.next_tag("div"));
        assert_eq!(p.tag_start(), Some(0));
        p.set_attribute("id", "abc");
        let end = p.tag_end().unwrap();
        assert_eq!(&p.html()[end..end + 6], "<span>");
        assert!(p.next_any_tag());
        assert_eq!(p.tag_name(), Some("span"));
    }

    #[test]
    fn boolean_attributes_read_as_empty() {
        let mut p = TagProcessor::new("<div hidden data-open>");
        assert!(p.next_tag("div"));
        assert_eq!(p.get_attribute("hidden"), Some(""));
        assert_eq!(p.get_attribute("missing"), None);
    }
}
