//! Errors returned by panel registration and controller operations

use crate::panel::PanelId;

/// Errors that can occur when registering or driving panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Malformed `id side style` triple (empty id, unknown side or style)
    InvalidSpec { reason: String },
    /// A panel with this id is already registered
    DuplicateId(PanelId),
    /// No panel is registered under this id
    NotFound(String),
}

impl PanelError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        PanelError::InvalidSpec {
            reason: reason.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        PanelError::NotFound(id.into())
    }
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelError::InvalidSpec { reason } => {
                write!(f, "invalid panel spec, expected 'id side style': {}", reason)
            }
            PanelError::DuplicateId(id) => {
                write!(f, "a panel with id '{}' already exists", id)
            }
            PanelError::NotFound(id) => write!(f, "there is no panel with id '{}'", id),
        }
    }
}

impl std::error::Error for PanelError {}
