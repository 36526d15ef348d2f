//! Rendered output tree.

use crate::error::NodeError;

/// A node of rendered page output.
///
/// Tag renderers build these; the [`html`](crate::html) module serializes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedNode {
    /// A page markup block, wrapped in a section container. Inserted verbatim.
    Markup(String),
    /// Trusted HTML produced by a renderer. Inserted verbatim, no wrapper.
    Raw(String),
    /// Plain text, escaped on output.
    Text(String),
    /// An element with attributes and children.
    Element {
        /// Element name.
        name: String,
        /// Attributes in output order.
        attributes: Vec<(String, String)>,
        /// Child nodes.
        children: Vec<RenderedNode>,
    },
    /// Children without a wrapping element.
    Fragment(Vec<RenderedNode>),
    /// Inline error display in place of a node that failed to render.
    Error(String),
}

impl RenderedNode {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw HTML node.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw(html.into())
    }

    /// Add an attribute. No effect on non-element nodes.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    /// Append a child. No effect on nodes other than elements and fragments.
    #[must_use]
    pub fn with_child(mut self, child: RenderedNode) -> Self {
        match &mut self {
            Self::Element { children, .. } | Self::Fragment(children) => children.push(child),
            _ => {}
        }
        self
    }

    /// Whether this is an error node.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Rendered output of one page.
///
/// The nodes are wrapped in a single container addressed by the page
/// reference when serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Reference of the page this output was rendered from.
    pub reference: String,
    /// Rendered nodes in content order.
    pub nodes: Vec<RenderedNode>,
    /// Failures replaced by error nodes, in content order.
    pub errors: Vec<NodeError>,
}

impl RenderedPage {
    /// Whether any content node failed to render.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
