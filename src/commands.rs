//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The only deferred effect is a transition completion timer.

use crate::panel::PanelId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Start the transition timer for a panel
    /// After delay_ms, sends Msg::TransitionComplete with the same generation
    CompleteTransition {
        panel_id: PanelId,
        generation: u64,
        delay_ms: u64,
    },
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Number of transition timers this command starts
    pub fn pending_transitions(&self) -> usize {
        match self {
            Cmd::None => 0,
            Cmd::Batch(cmds) => cmds.iter().map(Cmd::pending_transitions).sum(),
            Cmd::CompleteTransition { .. } => 1,
        }
    }
}
