//! Tag renderer trait and lookup table.

use std::collections::HashMap;
use std::fmt;

use crate::error::TagError;
use crate::node::RenderedNode;
use crate::page::{Page, TagNode};

/// Result of rendering one tagged node.
///
/// `Ok(None)` means the renderer deliberately produced no output; nothing is
/// placed at the node's position and no error is reported.
pub type TagResult = Result<Option<RenderedNode>, TagError>;

/// Handler for a tag: `{ "tag": "<name>", ... }`
///
/// Renderers receive the node, a position key that is stable for the node's
/// place in the page, and the whole page for page-level context.
///
/// Renderers are `Send + Sync` so one table can serve several pages rendered
/// in parallel.
///
/// # Example
///
/// ```
/// use folio_page::{Page, RenderedNode, TagNode, TagRenderer, TagResult};
///
/// struct SeeRenderer;
///
/// impl TagRenderer for SeeRenderer {
///     fn render(&self, tag: &TagNode, _key: usize, _page: &Page) -> TagResult {
///         let target = tag.value_str().unwrap_or_default();
///         Ok(Some(
///             RenderedNode::element("a")
///                 .with_attr("href", format!("#{target}"))
///                 .with_child(RenderedNode::text(target)),
///         ))
///     }
/// }
/// ```
pub trait TagRenderer: Send + Sync {
    /// Render a tagged node.
    fn render(&self, tag: &TagNode, key: usize, page: &Page) -> TagResult;
}

impl<F> TagRenderer for F
where
    F: Fn(&TagNode, usize, &Page) -> TagResult + Send + Sync,
{
    fn render(&self, tag: &TagNode, key: usize, page: &Page) -> TagResult {
        self(tag, key, page)
    }
}

/// Mapping from tag name to renderer. Lookups are exact string matches.
///
/// # Example
///
/// ```
/// use folio_page::{RenderedNode, RendererTable};
///
/// let table = RendererTable::new()
///     .with_fn("interface", |tag, _key, _page| {
///         Ok(Some(RenderedNode::text(tag.value_str().unwrap_or_default())))
///     });
///
/// assert!(table.contains("interface"));
/// assert!(!table.contains("Interface"));
/// ```
#[derive(Default)]
pub struct RendererTable {
    renderers: HashMap<String, Box<dyn TagRenderer>>,
}

impl RendererTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer, replacing any previous renderer for the same tag.
    #[must_use]
    pub fn with_renderer<R: TagRenderer + 'static>(
        mut self,
        tag: impl Into<String>,
        renderer: R,
    ) -> Self {
        self.insert(tag, renderer);
        self
    }

    /// Register a closure as a renderer.
    #[must_use]
    pub fn with_fn<F>(self, tag: impl Into<String>, f: F) -> Self
    where
        F: Fn(&TagNode, usize, &Page) -> TagResult + Send + Sync + 'static,
    {
        self.with_renderer(tag, f)
    }

    /// Register a renderer in place.
    ///
    /// Returns `true` if a renderer for the tag was already registered.
    pub fn insert<R: TagRenderer + 'static>(
        &mut self,
        tag: impl Into<String>,
        renderer: R,
    ) -> bool {
        let tag = tag.into();
        let replaced = self.renderers.insert(tag.clone(), Box::new(renderer)).is_some();
        if replaced {
            tracing::debug!(tag = %tag, "Replaced tag renderer");
        }
        replaced
    }

    /// Look up the renderer for a tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn TagRenderer> {
        self.renderers.get(tag).map(|renderer| &**renderer)
    }

    /// Whether a renderer is registered for the tag.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Registered tag names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered renderers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Whether no renderers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for RendererTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererTable")
            .field("tags", &self.names())
            .finish()
    }
}
