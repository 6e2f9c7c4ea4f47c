//! Document collaborators
//!
//! The core never touches a real DOM. It measures and mutates nodes through
//! [`Surface`] and discovers declared panels through [`ElementQuery`].
//! [`MemoryDocument`] implements both for tests, benches and the CLI.

mod memory;

use serde::{Deserialize, Serialize};

pub use memory::{MemoryDocument, MemoryElement};

/// Opaque handle to a node owned by the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// A node to append to the document body
#[derive(Debug, Clone)]
pub struct NewNode<'a> {
    /// Value of the html `id` attribute
    pub html_id: &'a str,
    /// Extra attributes, e.g. the `off-canvas` marker
    pub attributes: Vec<(&'a str, String)>,
    /// Inner html, if any
    pub content: Option<&'a str>,
}

/// Measurement and mutation of document nodes
pub trait Surface {
    /// Computed style value, e.g. `Some("250px")` for `width`
    fn css(&self, element: ElementId, property: &str) -> Option<String>;

    fn set_css(&mut self, element: ElementId, property: &str, value: &str);

    /// Computed height of the root (`html`) element
    fn document_height(&self) -> Option<String>;

    fn append_to_body(&mut self, node: NewNode<'_>) -> ElementId;

    /// Remove a node; unknown handles are ignored
    fn remove(&mut self, element: ElementId);
}

/// Attribute-based element discovery
pub trait ElementQuery {
    /// Elements carrying `attribute` (any value), in document order
    fn with_attribute(&self, attribute: &str) -> Vec<ElementId>;

    fn attribute(&self, element: ElementId, attribute: &str) -> Option<String>;
}
