//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! panel transitions and layout passes.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panel=debug,message=debug` - scoped filtering
//! - `RUST_LOG=offcanvas::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/offcanvas/logs/offcanvas.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::OffCanvas;
use crate::panel::{PanelId, PanelState};
use crate::surface::{ElementQuery, Surface};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging always
/// writes debug level for troubleshooting.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "offcanvas.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel states for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub panels: Vec<(PanelId, PanelState)>,
}

impl PanelSnapshot {
    pub fn from_model<D: Surface + ElementQuery>(model: &OffCanvas<D>) -> Self {
        Self {
            panels: model.states(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for (id, before) in &self.panels {
            match other.panels.iter().find(|(other_id, _)| other_id == id) {
                Some((_, after)) if after != before => {
                    changes.push(format!("{}: {:?} → {:?}", id, before, after));
                }
                Some(_) => {}
                None => changes.push(format!("{}: removed", id)),
            }
        }
        for (id, state) in &other.panels {
            if !self.panels.iter().any(|(before_id, _)| before_id == id) {
                changes.push(format!("{}: added ({:?})", id, state));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
