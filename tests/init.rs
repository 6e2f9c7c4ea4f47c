//! Discovery tests: registering panels declared in markup

mod common;

use common::{test_page, test_slidebars};
use offcanvas::{
    MemoryDocument, MemoryElement, OffCanvasConfig, PanelError, PanelState, Side, Slidebars,
    Style,
};

#[test]
fn test_init_registers_declared_panels_closed() {
    let sb = test_slidebars(&[
        ("nav left push", "250px", "100%"),
        ("cart right overlay", "300px", "100%"),
    ]);

    let ids: Vec<String> = sb.panel_ids().into_iter().map(String::from).collect();
    assert_eq!(ids, vec!["cart", "nav"]);

    let nav = sb.panel("nav").unwrap();
    assert_eq!(nav.side, Side::Left);
    assert_eq!(nav.style, Style::Push);
    assert_eq!(nav.state, PanelState::Closed);
    assert!(!sb.is_active("nav").unwrap());
}

#[test]
fn test_every_valid_side_and_style_registers() {
    let mut markers = Vec::new();
    for side in Side::ALL {
        for style in Style::ALL {
            markers.push(format!("{}-{} {} {}", side, style, side, style));
        }
    }
    let panels: Vec<(&str, &str, &str)> = markers
        .iter()
        .map(|m| (m.as_str(), "200px", "200px"))
        .collect();

    let sb = test_slidebars(&panels);
    assert_eq!(sb.panel_ids().len(), 16);
    for side in Side::ALL {
        for style in Style::ALL {
            let id = format!("{}-{}", side, style);
            assert!(!sb.is_active(&id).unwrap());
        }
    }
}

#[test]
fn test_invalid_markup_fails_init() {
    for marker in ["nav middle push", "nav left slide", "nav left", ""] {
        let mut sb = Slidebars::new(
            test_page(&[(marker, "250px", "100%")]),
            OffCanvasConfig::default(),
        );
        let err = sb.init().unwrap_err();
        assert!(
            matches!(err, PanelError::InvalidSpec { .. }),
            "marker {:?} gave {:?}",
            marker,
            err
        );
    }
}

#[test]
fn test_failed_init_registers_nothing() {
    let mut sb = Slidebars::new(
        test_page(&[
            ("nav left push", "250px", "100%"),
            ("cart right overlay", "300px", "100%"),
            ("nav top reveal", "100%", "50px"),
        ]),
        OffCanvasConfig::default(),
    );

    let err = sb.init().unwrap_err();
    assert!(matches!(err, PanelError::DuplicateId(ref id) if id.as_str() == "nav"));
    assert!(sb.panel_ids().is_empty());
}

#[test]
fn test_second_init_reports_duplicates() {
    let mut sb = test_slidebars(&[("nav left push", "250px", "100%")]);
    assert!(matches!(sb.init(), Err(PanelError::DuplicateId(_))));
    assert_eq!(sb.panel_ids().len(), 1);
}

#[test]
fn test_custom_attribute_names() {
    let mut doc = MemoryDocument::new(None);
    doc.push(MemoryElement::new("main").attr("data-canvas", "root"));
    doc.push(
        MemoryElement::new("aside")
            .attr("data-panel", "menu right shift")
            .style("width", "200px"),
    );
    // Default attribute is not read when renamed
    doc.push(MemoryElement::new("aside").attr("off-canvas", "ignored left push"));

    let config = OffCanvasConfig {
        panel_attribute: "data-panel".to_string(),
        canvas_attribute: "data-canvas".to_string(),
        container_value: "root".to_string(),
        ..OffCanvasConfig::default()
    };
    let mut sb = Slidebars::new(doc, config);
    sb.init().unwrap();

    let ids: Vec<String> = sb.panel_ids().into_iter().map(String::from).collect();
    assert_eq!(ids, vec!["menu"]);
    assert!(sb.model().canvas.container.is_some());
}
