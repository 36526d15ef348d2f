//! Page rendering.
//!
//! Maps each content node of a [`Page`] to rendered output:
//!
//! - markup blocks pass through verbatim,
//! - tagged nodes are dispatched to the renderer registered for their tag.
//!
//! A tag with no renderer, or a renderer that fails (returns an error or
//! panics), is replaced by an error node carrying the message. The failure is
//! logged and rendering continues with the next node, so no single node can
//! abort a page.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{NodeError, RenderError};
use crate::node::{RenderedNode, RenderedPage};
use crate::page::{ContentNode, Page, TagNode};
use crate::table::RendererTable;

/// Renders pages using a table of tag renderers.
///
/// # Example
///
/// ```
/// use folio_page::{Page, PageRenderer, RenderedNode, RendererTable, TagNode};
///
/// let table = RendererTable::new();
/// let page = Page::new("intro")
///     .with_markup("<p>Intro</p>")
///     .with_tag(TagNode::new("interface").with_value("Foo"));
///
/// let rendered = PageRenderer::new(&table).render(&page);
/// assert_eq!(rendered.nodes[1], RenderedNode::Error("Unknown @tag: interface".to_owned()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PageRenderer<'a> {
    table: &'a RendererTable,
}

impl<'a> PageRenderer<'a> {
    /// Create a renderer over a tag renderer table.
    #[must_use]
    pub fn new(table: &'a RendererTable) -> Self {
        Self { table }
    }

    /// Render a page.
    ///
    /// Output order matches content order. A renderer returning no output
    /// leaves nothing at its position.
    #[must_use]
    pub fn render(&self, page: &Page) -> RenderedPage {
        let mut nodes = Vec::with_capacity(page.contents.len());
        let mut errors = Vec::new();

        for (position, node) in page.contents.iter().enumerate() {
            match self.render_node(node, position, page) {
                Ok(Some(rendered)) => nodes.push(rendered),
                Ok(None) => {}
                Err(error) => {
                    tracing::error!(
                        page = %page.reference,
                        position,
                        tag = %error.tag(),
                        "{error}"
                    );
                    nodes.push(RenderedNode::Error(error.to_string()));
                    errors.push(NodeError { position, error });
                }
            }
        }

        RenderedPage {
            reference: page.reference.clone(),
            nodes,
            errors,
        }
    }

    /// Render a single content node at `position`.
    pub fn render_node(
        &self,
        node: &ContentNode,
        position: usize,
        page: &Page,
    ) -> Result<Option<RenderedNode>, RenderError> {
        match node {
            ContentNode::Markup(markup) => Ok(Some(RenderedNode::Markup(markup.clone()))),
            ContentNode::Tag(tag) => self.render_tag(tag, position, page),
        }
    }

    fn render_tag(
        &self,
        tag: &TagNode,
        position: usize,
        page: &Page,
    ) -> Result<Option<RenderedNode>, RenderError> {
        let renderer = self
            .table
            .get(&tag.tag)
            .ok_or_else(|| RenderError::UnknownTag {
                tag: tag.tag.clone(),
            })?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(tag, position, page)));

        match outcome {
            Ok(Ok(rendered)) => Ok(rendered),
            Ok(Err(err)) => Err(RenderError::Renderer {
                tag: tag.tag.clone(),
                message: err.message().to_owned(),
            }),
            Err(payload) => Err(RenderError::Renderer {
                tag: tag.tag.clone(),
                message: panic_message(payload.as_ref())
                    .unwrap_or_else(|| format!("renderer for @{} panicked", tag.tag)),
            }),
        }
    }
}

/// Render a page with the given tag renderers.
///
/// Shorthand for [`PageRenderer::new`] followed by [`PageRenderer::render`].
#[must_use]
pub fn render_page(page: &Page, table: &RendererTable) -> RenderedPage {
    PageRenderer::new(table).render(page)
}

/// Extract the message from a panic payload, if it is a string.
fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
