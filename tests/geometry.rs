//! Geometry tests: resting margins, canvas height and the layout pass

mod common;

use common::{canvas_elements, panel_style, style, test_slidebars};
use offcanvas::geometry::{resting_offset, translation};
use offcanvas::panel::Direction;
use offcanvas::{MemoryDocument, MemoryElement, OffCanvasConfig, Side, Slidebars, Style};

// ========================================================================
// Resting offsets
// ========================================================================

#[test]
fn test_left_panel_resting_margins_by_style() {
    let push = resting_offset(Side::Left, Style::Push, 250.0).unwrap();
    assert_eq!((push.property, push.value.as_str()), ("margin-left", "-250px"));

    let shift = resting_offset(Side::Left, Style::Shift, 250.0).unwrap();
    assert_eq!(shift.value, "-125px");

    assert!(resting_offset(Side::Left, Style::Reveal, 250.0).is_none());
}

#[test]
fn test_odd_extent_shift_keeps_fraction() {
    let shift = resting_offset(Side::Top, Style::Shift, 251.0).unwrap();
    assert_eq!(shift.property, "margin-top");
    assert_eq!(shift.value, "-125.5px");
}

#[test]
fn test_every_side_opens_towards_the_canvas() {
    for side in Side::ALL {
        let t = translation(side, Style::Push, 100.0, Direction::Open);
        let (x, y) = match side {
            Side::Top => (0.0, 100.0),
            Side::Right => (-100.0, 0.0),
            Side::Bottom => (0.0, -100.0),
            Side::Left => (100.0, 0.0),
        };
        assert_eq!((t.x, t.y), (x, y), "side {}", side);
        assert_eq!(
            translation(side, Style::Push, 100.0, Direction::Close).to_css(),
            "translate(0px, 0px)"
        );
    }
}

// ========================================================================
// Layout pass through init
// ========================================================================

#[test]
fn test_init_applies_resting_margins() {
    let sb = test_slidebars(&[
        ("push left push", "250px", "100%"),
        ("shift left shift", "250px", "100%"),
        ("overlay left overlay", "250px", "100%"),
        ("reveal left reveal", "250px", "100%"),
        ("top top push", "100%", "80px"),
    ]);

    assert_eq!(
        panel_style(&sb, "push", "margin-left").as_deref(),
        Some("-250px")
    );
    assert_eq!(
        panel_style(&sb, "shift", "margin-left").as_deref(),
        Some("-125px")
    );
    assert_eq!(
        panel_style(&sb, "overlay", "margin-left").as_deref(),
        Some("-250px")
    );
    assert_eq!(panel_style(&sb, "reveal", "margin-left"), None);
    assert_eq!(panel_style(&sb, "top", "margin-top").as_deref(), Some("-80px"));
}

#[test]
fn test_canvas_never_gets_margins() {
    let sb = test_slidebars(&[
        ("overlay left overlay", "250px", "100%"),
        ("reveal right reveal", "250px", "100%"),
    ]);

    for el in canvas_elements(&sb) {
        for side in Side::ALL {
            assert_eq!(style(&sb, el, side.margin_property()), None);
        }
    }
}

#[test]
fn test_malformed_measurements_rest_at_zero() {
    let sb = test_slidebars(&[("nav left push", "wide", "tall")]);
    assert_eq!(panel_style(&sb, "nav", "margin-left").as_deref(), Some("0px"));
}

// ========================================================================
// Canvas container height
// ========================================================================

#[test]
fn test_short_container_grows_to_document_height() {
    let sb = test_slidebars(&[]);
    let container = sb.model().canvas.container.unwrap();
    assert_eq!(
        style(&sb, container, "min-height").as_deref(),
        Some("900px")
    );
}

#[test]
fn test_tall_container_is_left_alone() {
    let mut doc = MemoryDocument::new(Some("900px".to_string()));
    let container = doc.push(
        MemoryElement::new("div")
            .attr("canvas", "container")
            .style("height", "1200px"),
    );
    let mut sb = Slidebars::new(doc, OffCanvasConfig::default());
    sb.init().unwrap();

    assert_eq!(style(&sb, container, "min-height"), None);
}

#[test]
fn test_missing_container_is_tolerated() {
    let mut doc = MemoryDocument::new(Some("900px".to_string()));
    doc.push(
        MemoryElement::new("div")
            .attr("off-canvas", "nav left push")
            .style("width", "250px"),
    );
    let mut sb = Slidebars::new(doc, OffCanvasConfig::default());
    sb.init().unwrap();

    assert!(sb.model().canvas.container.is_none());
    assert_eq!(panel_style(&sb, "nav", "margin-left").as_deref(), Some("-250px"));
}
