//! Panel lifecycle handlers: discovery, creation and teardown

use crate::animation::reset_canvas;
use crate::commands::Cmd;
use crate::error::PanelError;
use crate::geometry::layout_pass;
use crate::model::{Canvas, OffCanvas};
use crate::panel::{PanelSpec, PanelState};
use crate::surface::{ElementQuery, NewNode, Surface};

/// Discover canvas and declared panels, then lay everything out
///
/// All markup is validated before anything is registered.
pub fn init<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
) -> Result<Option<Cmd>, PanelError> {
    let discovered = model.discover_panels()?;

    model.canvas = Canvas::discover(&model.document, &model.config);
    for (spec, element) in discovered {
        model.registry.register(spec, element)?;
    }

    layout_pass(&mut model.document, model.canvas.container, &model.registry);

    tracing::info!(
        panels = model.registry.len(),
        canvas = model.canvas.elements.len(),
        has_container = model.canvas.container.is_some(),
        "off-canvas initialized"
    );
    Ok(None)
}

/// Append a panel node to the body and register it
///
/// Validation runs before the document is touched, so a failed create
/// leaves no stray node behind.
pub fn create<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: &str,
    side: &str,
    style: &str,
    content: Option<&str>,
) -> Result<Option<Cmd>, PanelError> {
    let spec = PanelSpec::parse_parts(id, side, style)?;
    if model.registry.contains(spec.id.as_str()) {
        return Err(PanelError::DuplicateId(spec.id));
    }

    let attribute = model.config.panel_attribute.as_str();
    let element = model.document.append_to_body(NewNode {
        html_id: spec.id.as_str(),
        attributes: vec![(attribute, spec.marker())],
        content,
    });
    model.registry.register(spec, element)?;

    layout_pass(&mut model.document, model.canvas.container, &model.registry);

    tracing::info!(panel = id, side, style, "panel created");
    Ok(None)
}

/// Remove a panel and its node
///
/// A panel that moved the canvas puts it back at rest on the way out.
pub fn destroy<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: &str,
) -> Result<Option<Cmd>, PanelError> {
    let panel = model.registry.remove(id)?;

    if panel.state != PanelState::Closed && panel.style.moves_canvas() {
        reset_canvas(&mut model.document, &model.canvas);
    }
    model.document.remove(panel.element);

    tracing::info!(panel = id, state = ?panel.state, "panel destroyed");
    Ok(None)
}
