//! Documentation page rendering with pluggable tag renderers.
//!
//! A [`Page`] is an ordered list of content nodes: blocks of pre-rendered
//! markup and structured tag nodes. [`PageRenderer`] maps the nodes to
//! [`RenderedNode`]s, dispatching each tag to the [`TagRenderer`] registered
//! for its name in a [`RendererTable`].
//!
//! # Architecture
//!
//! - Markup blocks are inserted verbatim. They are trusted to be sanitized by
//!   the extractor that produced the page.
//! - Unknown tags and failing renderers become inline error nodes. The failure
//!   is logged with `tracing` and does not affect the rest of the page.
//! - [`RenderedPage::to_html`] serializes the output, wrapping it in a
//!   container that carries the page reference as `data-page-id`.
//!
//! # Example
//!
//! ```
//! use folio_page::{HtmlOptions, Page, RenderedNode, RendererTable, TagNode, render_page};
//!
//! let table = RendererTable::new().with_fn("interface", |tag, _key, _page| {
//!     let name = tag.value_str().unwrap_or_default();
//!     Ok(Some(RenderedNode::element("code").with_child(RenderedNode::text(name))))
//! });
//!
//! let page = Page::new("buttons")
//!     .with_markup("<p>Intro</p>")
//!     .with_tag(TagNode::new("interface").with_value("IButtonProps"));
//!
//! let html = render_page(&page, &table).to_html(&HtmlOptions::default());
//! assert!(html.contains(r#"data-page-id="buttons""#));
//! assert!(html.contains("<code>IButtonProps</code>"));
//! ```

mod builtin;
mod error;
mod html;
mod node;
mod page;
mod renderer;
mod table;

pub use builtin::{HeadingRenderer, SilentRenderer};
pub use error::{LoadError, NodeError, RenderError, TagError};
pub use html::{HtmlOptions, escape_html, write_node};
pub use node::{RenderedNode, RenderedPage};
pub use page::{ContentNode, DocsData, Page, TagNode};
pub use renderer::{PageRenderer, render_page};
pub use table::{RendererTable, TagRenderer, TagResult};
