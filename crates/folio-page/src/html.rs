//! HTML serialization of rendered pages.
//!
//! Markup blocks and raw nodes pass through verbatim; they are trusted to be
//! sanitized upstream. Text, attribute values and error messages are escaped.

use std::borrow::Cow;

use crate::node::{RenderedNode, RenderedPage};

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Class names used for the page and section containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Class of the page container.
    pub page_class: String,
    /// Class of the container wrapping each markup block.
    pub section_class: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            page_class: "docs-page".to_owned(),
            section_class: "docs-section pt-running-text".to_owned(),
        }
    }
}

/// Escape HTML special characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Example
///
/// ```
/// use folio_page::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

impl RenderedPage {
    /// Serialize the page to HTML.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_page::{HtmlOptions, Page, RendererTable, render_page};
    ///
    /// let page = Page::new("intro").with_markup("<p>Hello</p>");
    /// let html = render_page(&page, &RendererTable::new()).to_html(&HtmlOptions::default());
    /// assert_eq!(
    ///     html,
    ///     r#"<div class="docs-page" data-page-id="intro"><div class="docs-section pt-running-text"><p>Hello</p></div></div>"#
    /// );
    /// ```
    #[must_use]
    pub fn to_html(&self, options: &HtmlOptions) -> String {
        let mut out = String::new();
        self.write_html(options, &mut out);
        out
    }

    /// Append the page HTML to `out`.
    pub fn write_html(&self, options: &HtmlOptions, out: &mut String) {
        out.push_str(r#"<div class=""#);
        out.push_str(&escape_html(&options.page_class));
        out.push_str(r#"" data-page-id=""#);
        out.push_str(&escape_html(&self.reference));
        out.push_str(r#"">"#);
        for node in &self.nodes {
            write_node(node, options, out);
        }
        out.push_str("</div>");
    }
}

/// Append the HTML of a single node to `out`.
pub fn write_node(node: &RenderedNode, options: &HtmlOptions, out: &mut String) {
    match node {
        RenderedNode::Markup(markup) => {
            out.push_str(r#"<div class=""#);
            out.push_str(&escape_html(&options.section_class));
            out.push_str(r#"">"#);
            out.push_str(markup);
            out.push_str("</div>");
        }
        RenderedNode::Raw(html) => out.push_str(html),
        RenderedNode::Text(text) => out.push_str(&escape_html(text)),
        RenderedNode::Element {
            name,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(name);
            for (key, value) in attributes {
                out.push(' ');
                out.push_str(key);
                out.push_str(r#"=""#);
                out.push_str(&escape_html(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&name.as_str()) {
                return;
            }

            for child in children {
                write_node(child, options, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        RenderedNode::Fragment(children) => {
            for child in children {
                write_node(child, options, out);
            }
        }
        RenderedNode::Error(message) => {
            out.push_str("<h3><code>");
            out.push_str(&escape_html(message));
            out.push_str("</code></h3>");
        }
    }
}
