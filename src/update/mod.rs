//! Update functions for the Elm-style architecture
//!
//! All panel state transformations flow through these functions.

mod lifecycle;
mod panel;

use crate::commands::Cmd;
use crate::error::PanelError;
use crate::messages::Msg;
use crate::model::OffCanvas;
use crate::surface::{ElementQuery, Surface};

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use lifecycle::{create, destroy, init};
pub use panel::{close, complete, open, toggle};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    msg: Msg,
) -> Result<Option<Cmd>, PanelError> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    msg: Msg,
) -> Result<Option<Cmd>, PanelError> {
    match msg {
        Msg::Init => init(model),
        Msg::Open(id) => open(model, &id),
        Msg::Close(id) => close(model, id.as_deref()),
        Msg::Toggle(id) => toggle(model, &id),
        Msg::Create {
            id,
            side,
            style,
            content,
        } => create(model, &id, &side, &style, content.as_deref()),
        Msg::Destroy(id) => destroy(model, &id),
        Msg::TransitionComplete {
            panel_id,
            generation,
        } => complete(model, &panel_id, generation),
    }
}

/// Update with a span per message and a diff of panel states
#[cfg(debug_assertions)]
fn update_traced<D: Surface + ElementQuery>(
    model: &mut OffCanvas<D>,
    msg: Msg,
) -> Result<Option<Cmd>, PanelError> {
    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = PanelSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = PanelSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }
    if let Err(ref e) = result {
        debug!(target: "message", msg = %msg_name, error = %e, "rejected");
    }

    result
}
