//! Panel system - off-canvas panel records and their registry
//!
//! Panels are content regions that rest outside the visible viewport and
//! slide in from one edge on command.
//!
//! ## Architecture
//!
//! - `Side`: Top, Right, Bottom, or Left edge the panel is anchored to
//! - `Style`: Reveal, Push, Overlay, or Shift interaction mode
//! - `PanelSpec`: validated `id side style` triple from markup or `create`
//! - `PanelState`: Closed → Opening → Open → Closing → Closed
//! - `Registry`: id → `Panel` mapping with uniqueness checks
//!
//! ## Integration
//!
//! The registry is owned by `OffCanvas` (see `model.rs`). Geometry for the
//! resting layout lives in `geometry.rs`; transitions are driven by
//! `animation.rs` and settled by `Msg::TransitionComplete`.

mod registry;
mod types;

pub use registry::Registry;
pub use types::{Axis, Direction, Panel, PanelId, PanelSpec, PanelState, Side, Style};
