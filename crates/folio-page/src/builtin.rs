//! Built-in tag renderers.

use serde::Deserialize;

use crate::error::TagError;
use crate::node::RenderedNode;
use crate::page::{Page, TagNode};
use crate::table::{RendererTable, TagRenderer, TagResult};

/// Heading tag emitted by the documentation extractor.
#[derive(Deserialize)]
struct HeadingTag {
    value: String,
    level: i64,
    #[serde(default)]
    route: Option<String>,
}

/// Renders `{ "tag": "heading", "value": "Usage", "level": 2, "route": "buttons.usage" }`
/// as `<h2 class="docs-title" data-route="buttons.usage">Usage</h2>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadingRenderer;

impl TagRenderer for HeadingRenderer {
    fn render(&self, tag: &TagNode, _key: usize, _page: &Page) -> TagResult {
        let heading: HeadingTag = tag.data()?;
        let level = u8::try_from(heading.level)
            .ok()
            .filter(|level| (1..=6).contains(level))
            .ok_or_else(|| TagError::new(format!("Invalid heading level: {}", heading.level)))?;

        let mut node =
            RenderedNode::element(format!("h{level}")).with_attr("class", "docs-title");
        if let Some(route) = heading.route {
            node = node.with_attr("data-route", route);
        }
        Ok(Some(node.with_child(RenderedNode::Text(heading.value))))
    }
}

/// Renders nothing. Registered for tags that should be dropped from output.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentRenderer;

impl TagRenderer for SilentRenderer {
    fn render(&self, _tag: &TagNode, _key: usize, _page: &Page) -> TagResult {
        Ok(None)
    }
}

impl RendererTable {
    /// Create a table with the built-in renderers (`heading`).
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new().with_renderer("heading", HeadingRenderer)
    }
}
