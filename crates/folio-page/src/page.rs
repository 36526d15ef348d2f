//! Page data produced by the documentation extractor.
//!
//! A page is an ordered list of content nodes. In JSON, a bare string is a
//! block of pre-rendered markup and an object with a `"tag"` field is a tagged
//! node:
//!
//! ```json
//! {
//!   "reference": "buttons",
//!   "title": "Buttons",
//!   "contents": [
//!     "<p>Intro</p>",
//!     { "tag": "interface", "value": "IButtonProps" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LoadError, TagError};

/// A documentation page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique page identifier, used for addressing.
    pub reference: String,
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Navigation route.
    #[serde(default)]
    pub route: String,
    /// Ordered page content.
    pub contents: Vec<ContentNode>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            title: String::new(),
            route: String::new(),
            contents: Vec::new(),
        }
    }

    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a markup block.
    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.contents.push(ContentNode::Markup(markup.into()));
        self
    }

    /// Append a tagged node.
    #[must_use]
    pub fn with_tag(mut self, tag: TagNode) -> Self {
        self.contents.push(ContentNode::Tag(tag));
        self
    }

    /// Iterate over the tagged nodes of the page.
    pub fn tags(&self) -> impl Iterator<Item = &TagNode> {
        self.contents.iter().filter_map(|node| match node {
            ContentNode::Tag(tag) => Some(tag),
            ContentNode::Markup(_) => None,
        })
    }
}

/// One unit of page content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// Pre-rendered markup, inserted verbatim. Assumed sanitized upstream.
    Markup(String),
    /// Structured node rendered by a tag renderer.
    Tag(TagNode),
}

/// A structured content node dispatched to a renderer by its tag name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    /// Tag name (e.g. `interface`, `heading`).
    pub tag: String,
    /// Primary tag value.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
    /// Any other fields of the node.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl TagNode {
    /// Create a tag node with no value.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: Value::Null,
            attributes: Map::new(),
        }
    }

    /// Set the tag value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Set an extra attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an extra attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The value as a string, if it is one.
    #[must_use]
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Deserialize the whole node (tag, value and attributes) into a typed struct.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_page::TagNode;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Interface {
    ///     value: String,
    ///     exported: bool,
    /// }
    ///
    /// let node = TagNode::new("interface")
    ///     .with_value("IProps")
    ///     .with_attribute("exported", true);
    /// let data: Interface = node.data().unwrap();
    /// assert_eq!(data.value, "IProps");
    /// assert!(data.exported);
    /// ```
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, TagError> {
        let mut object = self.attributes.clone();
        object.insert("tag".to_owned(), Value::String(self.tag.clone()));
        object.insert("value".to_owned(), self.value.clone());
        serde_json::from_value(Value::Object(object))
            .map_err(|e| TagError::new(format!("Invalid @{} data: {e}", self.tag)))
    }
}

/// A collection of pages keyed by reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocsData {
    pages: BTreeMap<String, Page>,
}

impl DocsData {
    /// Build a collection from pages, keyed by their references.
    ///
    /// A later page with the same reference replaces an earlier one.
    #[must_use]
    pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|page| (page.reference.clone(), page))
                .collect(),
        }
    }

    /// Parse page data from JSON.
    ///
    /// Accepts either a single page object or an object with a `pages`
    /// (or `docs`) map of reference to page.
    ///
    /// A malformed page inside the map is reported with its key.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let mut value: Value = serde_json::from_str(json)?;
        let collection = value
            .as_object_mut()
            .and_then(|object| object.remove("pages").or_else(|| object.remove("docs")));
        let Some(collection) = collection else {
            let page: Page = serde_json::from_value(value)?;
            return Ok(Self::from_pages([page]));
        };

        let entries: Map<String, Value> = serde_json::from_value(collection)?;
        let mut pages = BTreeMap::new();
        for (key, entry) in entries {
            let page: Page = serde_json::from_value(entry).map_err(|source| {
                LoadError::InvalidPage {
                    key: key.clone(),
                    source,
                }
            })?;
            if key != page.reference {
                tracing::warn!(
                    key = %key,
                    reference = %page.reference,
                    "Page key does not match its reference"
                );
            }
            pages.insert(key, page);
        }
        Ok(Self { pages })
    }

    /// Load page data from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), page_count = data.len(), "Loaded page data");
        Ok(data)
    }

    /// Get a page by its key.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&Page> {
        self.pages.get(reference)
    }

    /// Iterate over pages in key order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// Iterate over page keys in order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the collection has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
