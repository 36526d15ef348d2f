//! Error types for page rendering and data loading.

use std::path::PathBuf;

/// Error returned by a [`TagRenderer`](crate::TagRenderer) that cannot render its tag.
///
/// The message is shown verbatim in the error node that replaces the tag.
///
/// # Example
///
/// ```
/// use folio_page::TagError;
///
/// let err = TagError::new("Missing @interface name");
/// assert_eq!(err.to_string(), "Missing @interface name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TagError {
    message: String,
}

impl TagError {
    /// Create a new error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for TagError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for TagError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Failure to render a single tagged content node.
///
/// Both variants are recoverable: the page renderer substitutes an error node
/// and moves on to the next entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No renderer is registered for the tag.
    #[error("Unknown @tag: {tag}")]
    UnknownTag {
        /// Tag name as found in the page data.
        tag: String,
    },
    /// The registered renderer failed.
    #[error("{message}")]
    Renderer {
        /// Tag name the renderer was invoked for.
        tag: String,
        /// Message reported by the renderer.
        message: String,
    },
}

impl RenderError {
    /// Tag name of the node that failed.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::UnknownTag { tag } | Self::Renderer { tag, .. } => tag,
        }
    }
}

/// A [`RenderError`] together with the content position it occurred at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeError {
    /// Index of the failing entry in the page contents.
    pub position: usize,
    /// The failure.
    pub error: RenderError,
}

/// Error returned when page data cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Data file not found.
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the data file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Data is not valid page JSON.
    #[error("Invalid page data: {0}")]
    Json(#[from] serde_json::Error),
    /// One page of a `pages` map is malformed.
    #[error("Invalid page '{key}': {source}")]
    InvalidPage {
        /// Key of the page in the map.
        key: String,
        /// Deserialization failure.
        source: serde_json::Error,
    },
}
