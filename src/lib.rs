//! Off-canvas panels - Elm-style sidebar controller
//!
//! This crate provides the core types and logic for managing off-canvas
//! panels (sidebars) that slide in from a page edge, implementing the Elm
//! Architecture pattern over an abstract document surface.

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod script;
pub mod surface;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::OffCanvasConfig;
pub use error::PanelError;
pub use messages::Msg;
pub use model::OffCanvas;
pub use panel::{Panel, PanelId, PanelSpec, PanelState, Side, Style};
pub use runtime::Slidebars;
pub use surface::{ElementId, ElementQuery, MemoryDocument, MemoryElement, Surface};
