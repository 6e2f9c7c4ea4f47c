//! Scripted panel operations
//!
//! A script is a YAML list of steps run against a `Slidebars` controller,
//! used by the CLI to replay interactions on a page fixture:
//!
//! ```yaml
//! - open: nav
//! - wait: 300
//! - create: { id: cart, side: right, style: overlay, content: "<p>Cart</p>" }
//! - close: ~
//! - settle
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_yaml::with::singleton_map_recursive;

use crate::error::PanelError;
use crate::runtime::Slidebars;
use crate::surface::{ElementQuery, Surface};

/// Arguments of a `create` step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStep {
    pub id: String,
    pub side: String,
    pub style: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// One scripted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Open(String),
    /// `close: ~` closes every active panel
    Close(Option<String>),
    Toggle(String),
    Create(CreateStep),
    Destroy(String),
    /// Advance the clock by this many milliseconds
    Wait(u64),
    /// Advance until no transitions are pending
    Settle,
}

impl Step {
    /// Apply this step to a controller
    pub fn apply<D: Surface + ElementQuery>(
        &self,
        slidebars: &mut Slidebars<D>,
    ) -> Result<(), PanelError> {
        match self {
            Step::Open(id) => slidebars.open(id),
            Step::Close(id) => slidebars.close(id.as_deref()),
            Step::Toggle(id) => slidebars.toggle(id),
            Step::Create(step) => slidebars.create(
                &step.id,
                &step.side,
                &step.style,
                step.content.as_deref(),
            ),
            Step::Destroy(id) => slidebars.destroy(id),
            Step::Wait(ms) => {
                slidebars.advance(Duration::from_millis(*ms));
                Ok(())
            }
            Step::Settle => {
                slidebars.settle();
                Ok(())
            }
        }
    }

    /// Short label for progress output
    pub fn label(&self) -> String {
        match self {
            Step::Open(id) => format!("open {}", id),
            Step::Close(Some(id)) => format!("close {}", id),
            Step::Close(None) => "close all".to_string(),
            Step::Toggle(id) => format!("toggle {}", id),
            Step::Create(step) => format!("create {} {} {}", step.id, step.side, step.style),
            Step::Destroy(id) => format!("destroy {}", id),
            Step::Wait(ms) => format!("wait {}ms", ms),
            Step::Settle => "settle".to_string(),
        }
    }
}

/// Parse a YAML step list
///
/// Steps are written as single-key maps (`open: nav`) or bare names for
/// steps without arguments (`settle`).
pub fn parse_script(source: &str) -> Result<Vec<Step>, String> {
    singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(source))
        .map_err(|e| format!("Failed to parse script: {}", e))
}
