//! Animation engine - slides panels and the canvas between rest and open
//!
//! The engine only writes transforms and hands back a timer command. It
//! never touches `Panel::state`; that happens when the timer's
//! `Msg::TransitionComplete` is applied.

use crate::commands::Cmd;
use crate::geometry::{measure_extent, translation};
use crate::model::Canvas;
use crate::panel::{Direction, Panel, Style};
use crate::surface::{ElementId, Surface};

/// Elements that move when a panel of `style` slides
pub fn moving_elements(style: Style, canvas: &Canvas, panel_element: ElementId) -> Vec<ElementId> {
    let mut elements = Vec::new();
    if style.moves_canvas() {
        elements.extend(canvas.elements.iter().copied());
    }
    if style.moves_panel() && !elements.contains(&panel_element) {
        elements.push(panel_element);
    }
    elements
}

/// Apply the transform for `direction` and start the completion timer
///
/// The panel must already carry the generation of this transition.
pub fn animate<S: Surface + ?Sized>(
    surface: &mut S,
    canvas: &Canvas,
    panel: &Panel,
    direction: Direction,
    duration_ms: u64,
) -> Cmd {
    let extent = measure_extent(surface, panel.element, panel.side);
    let transform = translation(panel.side, panel.style, extent, direction).to_css();
    let elements = moving_elements(panel.style, canvas, panel.element);

    for &element in &elements {
        surface.set_css(element, "transform", &transform);
    }

    tracing::debug!(
        panel = %panel.id,
        generation = panel.generation,
        ?direction,
        %transform,
        moved = elements.len(),
        "transition started"
    );

    Cmd::CompleteTransition {
        panel_id: panel.id.clone(),
        generation: panel.generation,
        delay_ms: duration_ms,
    }
}

/// Put canvas elements back at rest, e.g. after their panel is destroyed
pub fn reset_canvas<S: Surface + ?Sized>(surface: &mut S, canvas: &Canvas) {
    let rest = crate::geometry::Translation::ZERO.to_css();
    for &element in &canvas.elements {
        surface.set_css(element, "transform", &rest);
    }
}
