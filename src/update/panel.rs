//! Panel transition handlers
//!
//! open/close/toggle start transitions; `complete` settles them. Every
//! transition takes a fresh generation so a timer from a superseded
//! transition lands as a no-op.

use crate::animation::animate;
use crate::commands::Cmd;
use crate::error::PanelError;
use crate::model::OffCanvas;
use crate::panel::{Direction, PanelId, PanelState};
use crate::surface::{ElementQuery, Surface};

/// Mark a panel as transitioning and apply its transform
fn begin_transition<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: &str,
    direction: Direction,
) -> Result<Cmd, PanelError> {
    let generation = model.next_generation();
    let duration_ms = model.config.transition_ms;

    let panel = model.registry.lookup_mut(id)?;
    panel.generation = generation;
    panel.state = direction.pending_state();

    Ok(animate(
        &mut model.document,
        &model.canvas,
        panel,
        direction,
        duration_ms,
    ))
}

pub fn open<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: &str,
) -> Result<Option<Cmd>, PanelError> {
    let panel = model.registry.lookup(id)?;
    if panel.state.is_heading_open() {
        tracing::debug!(panel = id, state = ?panel.state, "open ignored");
        return Ok(None);
    }

    let element = panel.element;
    model.document.set_css(element, "display", "block");
    begin_transition(model, id, Direction::Open).map(Some)
}

pub fn close<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: Option<&str>,
) -> Result<Option<Cmd>, PanelError> {
    match id {
        Some(id) => close_one(model, id),
        None => close_all(model).map(Some),
    }
}

fn close_one<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: &str,
) -> Result<Option<Cmd>, PanelError> {
    let panel = model.registry.lookup(id)?;
    if !panel.state.is_heading_open() {
        tracing::debug!(panel = id, state = ?panel.state, "close ignored");
        return Ok(None);
    }
    begin_transition(model, id, Direction::Close).map(Some)
}

/// Close every panel that is open or on its way there
fn close_all<D: Surface + ElementQuery>(model: &mut OffCanvas<D>) -> Result<Cmd, PanelError> {
    let targets: Vec<PanelId> = model
        .states()
        .into_iter()
        .filter(|(_, state)| state.is_heading_open())
        .map(|(id, _)| id)
        .collect();

    let mut cmds = Vec::with_capacity(targets.len());
    for id in &targets {
        cmds.push(begin_transition(model, id.as_str(), Direction::Close)?);
    }
    Ok(Cmd::batch(cmds))
}

pub fn toggle<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    id: &str,
) -> Result<Option<Cmd>, PanelError> {
    if model.registry.lookup(id)?.state.is_heading_open() {
        close_one(model, id)
    } else {
        open(model, id)
    }
}

/// Apply a fired transition timer
///
/// Timers for destroyed panels or superseded transitions are dropped.
pub fn complete<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    panel_id: &PanelId,
    generation: u64,
) -> Result<Option<Cmd>, PanelError> {
    let Ok(panel) = model.registry.lookup_mut(panel_id.as_str()) else {
        tracing::debug!(panel = %panel_id, generation, "completion for missing panel dropped");
        return Ok(None);
    };

    if panel.generation != generation {
        tracing::debug!(
            "Skipping stale completion for {}: panel generation {} != timer generation {}",
            panel_id,
            panel.generation,
            generation
        );
        return Ok(None);
    }

    let direction = match panel.state {
        PanelState::Opening => Direction::Open,
        PanelState::Closing => Direction::Close,
        settled => {
            tracing::debug!(panel = %panel_id, state = ?settled, "completion for settled panel");
            return Ok(None);
        }
    };

    panel.state = direction.settled_state();
    panel.active = direction == Direction::Open;
    let element = panel.element;
    if direction == Direction::Close {
        model.document.set_css(element, "display", "none");
    }

    tracing::debug!(panel = %panel_id, state = ?direction.settled_state(), "transition complete");
    Ok(None)
}
