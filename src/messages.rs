//! Message types for the Elm-style architecture
//!
//! All panel state changes flow through these message types.

use crate::panel::PanelId;

/// Panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Discover declared panels and run the first layout pass
    Init,
    /// Slide a panel into view
    Open(String),
    /// Close one panel, or every active panel when `None`
    Close(Option<String>),
    /// Open a closed panel, close an open one
    Toggle(String),
    /// Append a new panel node and register it
    Create {
        id: String,
        side: String,
        style: String,
        content: Option<String>,
    },
    /// Remove a panel and its node
    Destroy(String),
    /// A transition timer fired
    TransitionComplete { panel_id: PanelId, generation: u64 },
}

impl Msg {
    /// Short name for logging
    pub fn name(&self) -> String {
        match self {
            Msg::Init => "Init".to_string(),
            Msg::Open(id) => format!("Open({})", id),
            Msg::Close(Some(id)) => format!("Close({})", id),
            Msg::Close(None) => "Close(*)".to_string(),
            Msg::Toggle(id) => format!("Toggle({})", id),
            Msg::Create { id, .. } => format!("Create({})", id),
            Msg::Destroy(id) => format!("Destroy({})", id),
            Msg::TransitionComplete {
                panel_id,
                generation,
            } => format!("TransitionComplete({}#{})", panel_id, generation),
        }
    }
}
