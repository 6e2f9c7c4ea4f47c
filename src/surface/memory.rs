//! In-memory document used by tests, benches and the CLI
//!
//! Styles are stored verbatim; there is no cascade or layout, so a
//! "computed" value is whatever was last set on the element.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ElementId, ElementQuery, NewNode, Surface};

/// A single node in a [`MemoryDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryElement {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_tag() -> String {
    "div".to_string()
}

impl MemoryElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set an attribute (builder pattern)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a style property (builder pattern)
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }
}

/// Serialized page layout: what a fixture file contains
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PageFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    document_height: Option<String>,
    #[serde(default)]
    elements: Vec<MemoryElement>,
}

/// Flat in-memory document; the body is the element list in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PageFixture", into = "PageFixture")]
pub struct MemoryDocument {
    pub document_height: Option<String>,
    nodes: Vec<(ElementId, MemoryElement)>,
    next_handle: u64,
}

impl From<PageFixture> for MemoryDocument {
    fn from(fixture: PageFixture) -> Self {
        let mut document = MemoryDocument::new(fixture.document_height);
        for element in fixture.elements {
            document.push(element);
        }
        document
    }
}

impl From<MemoryDocument> for PageFixture {
    fn from(document: MemoryDocument) -> Self {
        PageFixture {
            document_height: document.document_height,
            elements: document.nodes.into_iter().map(|(_, el)| el).collect(),
        }
    }
}

impl MemoryDocument {
    pub fn new(document_height: Option<String>) -> Self {
        Self {
            document_height,
            nodes: Vec::new(),
            next_handle: 1,
        }
    }

    /// Parse a YAML page fixture
    pub fn from_yaml(source: &str) -> Result<Self, String> {
        serde_yaml::from_str(source).map_err(|e| format!("Failed to parse page: {}", e))
    }

    /// Append an element to the body, returning its handle
    pub fn push(&mut self, element: MemoryElement) -> ElementId {
        let handle = ElementId(self.next_handle.max(1));
        self.next_handle = handle.0 + 1;
        self.nodes.push((handle, element));
        handle
    }

    pub fn get(&self, element: ElementId) -> Option<&MemoryElement> {
        self.nodes
            .iter()
            .find(|(handle, _)| *handle == element)
            .map(|(_, el)| el)
    }

    fn get_mut(&mut self, element: ElementId) -> Option<&mut MemoryElement> {
        self.nodes
            .iter_mut()
            .find(|(handle, _)| *handle == element)
            .map(|(_, el)| el)
    }

    /// Find an element by its html `id` attribute
    pub fn find_by_html_id(&self, html_id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .find(|(_, el)| el.attributes.get("id").map(String::as_str) == Some(html_id))
            .map(|(handle, _)| *handle)
    }

    /// Shorthand for a style lookup on an element
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.get(element)
            .and_then(|el| el.styles.get(property))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Surface for MemoryDocument {
    fn css(&self, element: ElementId, property: &str) -> Option<String> {
        self.style(element, property).map(str::to_string)
    }

    fn set_css(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(el) = self.get_mut(element) {
            el.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn document_height(&self) -> Option<String> {
        self.document_height.clone()
    }

    fn append_to_body(&mut self, node: NewNode<'_>) -> ElementId {
        let mut element = MemoryElement::new("div").attr("id", node.html_id);
        for (name, value) in node.attributes {
            element = element.attr(name, value);
        }
        element.content = node.content.map(str::to_string);
        self.push(element)
    }

    fn remove(&mut self, element: ElementId) {
        self.nodes.retain(|(handle, _)| *handle != element);
    }
}

impl ElementQuery for MemoryDocument {
    fn with_attribute(&self, attribute: &str) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, el)| el.attributes.contains_key(attribute))
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn attribute(&self, element: ElementId, attribute: &str) -> Option<String> {
        self.get(element)
            .and_then(|el| el.attributes.get(attribute))
            .cloned()
    }
}
