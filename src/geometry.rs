//! Geometry for off-canvas panels
//!
//! Pure helpers that turn a panel's side, style and measured extent into
//! resting margins and slide translations, plus the layout pass that
//! applies them to a [`Surface`].

use crate::panel::{Direction, Panel, Registry, Side, Style};
use crate::surface::{ElementId, Surface};

/// Parse a CSS pixel length such as `"250px"` or `"62.5"`
///
/// Malformed, absent and negative values all measure as zero so that a
/// missing stylesheet degrades to "no offset" instead of an error.
pub fn parse_px(value: Option<&str>) -> f32 {
    let Some(value) = value else {
        return 0.0;
    };
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f32>() {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

/// Format a pixel length, dropping the fraction for whole numbers
pub fn format_px(value: f32) -> String {
    // Avoid "-0px"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

/// Measure a panel's extent along its slide axis (height or width)
pub fn measure_extent<S: Surface + ?Sized>(surface: &S, element: ElementId, side: Side) -> f32 {
    parse_px(surface.css(element, side.extent_property()).as_deref())
}

/// How far a panel of `style` travels when it opens
pub fn travel(style: Style, extent: f32) -> f32 {
    match style {
        Style::Shift => extent / 2.0,
        Style::Reveal | Style::Push | Style::Overlay => extent,
    }
}

/// A margin property and its value, e.g. `margin-left: -250px`
#[derive(Debug, Clone, PartialEq)]
pub struct MarginRule {
    pub property: &'static str,
    pub value: String,
}

/// Static negative margin that keeps a closed panel outside the canvas
///
/// Reveal panels rest underneath the canvas and need no margin.
pub fn resting_offset(side: Side, style: Style, extent: f32) -> Option<MarginRule> {
    match style {
        Style::Reveal => None,
        Style::Push | Style::Overlay | Style::Shift => Some(MarginRule {
            property: side.margin_property(),
            value: format_px(-travel(style, extent)),
        }),
    }
}

/// 2D translation applied as a `transform`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Translation = Translation { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Render as a CSS transform value
    pub fn to_css(&self) -> String {
        format!("translate({}, {})", format_px(self.x), format_px(self.y))
    }
}

/// Translation for a transition in `direction`
///
/// Opening moves towards the opposite edge by the style's travel; closing
/// always returns to rest.
pub fn translation(side: Side, style: Style, extent: f32, direction: Direction) -> Translation {
    if direction == Direction::Close {
        return Translation::ZERO;
    }
    let d = travel(style, extent);
    match side {
        Side::Top => Translation::new(0.0, d),
        Side::Right => Translation::new(-d, 0.0),
        Side::Bottom => Translation::new(0.0, -d),
        Side::Left => Translation::new(d, 0.0),
    }
}

/// Grow the canvas container to at least the full document height
///
/// Returns true when a `min-height` was applied.
pub fn ensure_canvas_min_height<S: Surface + ?Sized>(
    surface: &mut S,
    container: Option<ElementId>,
) -> bool {
    let Some(container) = container else {
        return false;
    };
    let Some(document_height) = surface.document_height() else {
        return false;
    };
    let current = parse_px(surface.css(container, "height").as_deref());
    if current < parse_px(Some(&document_height)) {
        surface.set_css(container, "min-height", &document_height);
        tracing::debug!("canvas container min-height set to {}", document_height);
        true
    } else {
        false
    }
}

/// Apply a panel's resting margin, if its style has one
pub fn apply_resting_offset<S: Surface + ?Sized>(surface: &mut S, panel: &Panel) {
    let extent = measure_extent(surface, panel.element, panel.side);
    if let Some(rule) = resting_offset(panel.side, panel.style, extent) {
        surface.set_css(panel.element, rule.property, &rule.value);
    }
}

/// Full layout pass: canvas height check, then every panel's resting margin
pub fn layout_pass<S: Surface + ?Sized>(
    surface: &mut S,
    container: Option<ElementId>,
    registry: &Registry,
) {
    ensure_canvas_min_height(surface, container);
    for panel in registry.all() {
        apply_resting_offset(surface, panel);
    }
    tracing::debug!(panels = registry.len(), "layout pass complete");
}
