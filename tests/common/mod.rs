//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use offcanvas::{ElementId, MemoryDocument, MemoryElement, OffCanvasConfig, Slidebars};

/// Transition duration used by every test controller
pub const TRANSITION: Duration = Duration::from_millis(300);

/// A page with a canvas container (600px tall in a 900px document) and one
/// plain canvas element, plus the given panel declarations.
///
/// Each panel is `(marker, width, height)`.
pub fn test_page(panels: &[(&str, &str, &str)]) -> MemoryDocument {
    let mut doc = MemoryDocument::new(Some("900px".to_string()));
    doc.push(
        MemoryElement::new("div")
            .attr("canvas", "container")
            .style("height", "600px"),
    );
    doc.push(MemoryElement::new("main").attr("canvas", ""));
    for (marker, width, height) in panels {
        doc.push(
            MemoryElement::new("div")
                .attr("off-canvas", *marker)
                .style("width", *width)
                .style("height", *height),
        );
    }
    doc
}

/// Initialized controller over `test_page(panels)`
pub fn test_slidebars(panels: &[(&str, &str, &str)]) -> Slidebars<MemoryDocument> {
    let mut slidebars = Slidebars::new(test_page(panels), OffCanvasConfig::default());
    slidebars.init().unwrap();
    slidebars
}

/// The standard "nav" scenario: a 250px left push panel
pub fn nav_push() -> Slidebars<MemoryDocument> {
    test_slidebars(&[("nav left push", "250px", "100%")])
}

/// Canvas element handles, container first
pub fn canvas_elements(slidebars: &Slidebars<MemoryDocument>) -> Vec<ElementId> {
    slidebars.model().canvas.elements.clone()
}

/// Style value on an element, if set
pub fn style(
    slidebars: &Slidebars<MemoryDocument>,
    element: ElementId,
    property: &str,
) -> Option<String> {
    slidebars
        .document()
        .style(element, property)
        .map(str::to_string)
}

/// Style value on a panel's element
pub fn panel_style(
    slidebars: &Slidebars<MemoryDocument>,
    id: &str,
    property: &str,
) -> Option<String> {
    let element = slidebars.panel(id).unwrap().element;
    style(slidebars, element, property)
}
