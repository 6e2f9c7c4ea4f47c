//! Panel records and the values they are built from
//!
//! This module defines the core data structures for off-canvas panels:
//! the edge a panel is anchored to, its slide style, the validated
//! `id side style` triple, and the per-panel transition state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;
use crate::surface::ElementId;

/// Viewport edge a panel is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides for iteration
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Returns the axis a panel on this side slides along
    pub fn axis(&self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    /// Style property that holds the panel's extent (height or width)
    pub fn extent_property(&self) -> &'static str {
        match self.axis() {
            Axis::Vertical => "height",
            Axis::Horizontal => "width",
        }
    }

    /// Side-named margin property used for the resting offset
    pub fn margin_property(&self) -> &'static str {
        match self {
            Side::Top => "margin-top",
            Side::Right => "margin-right",
            Side::Bottom => "margin-bottom",
            Side::Left => "margin-left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            other => Err(PanelError::invalid(format!("unknown side '{}'", other))),
        }
    }
}

/// Axis a panel slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Visual interaction mode of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Canvas slides away to reveal a panel resting underneath it
    Reveal,
    /// Canvas and panel move together
    Push,
    /// Panel slides over a static canvas
    Overlay,
    /// Canvas and panel each move half the panel's extent
    Shift,
}

impl Style {
    /// All styles for iteration
    pub const ALL: [Style; 4] = [Style::Reveal, Style::Push, Style::Overlay, Style::Shift];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Reveal => "reveal",
            Style::Push => "push",
            Style::Overlay => "overlay",
            Style::Shift => "shift",
        }
    }

    /// Whether opening a panel of this style translates the shared canvas
    pub fn moves_canvas(&self) -> bool {
        matches!(self, Style::Reveal | Style::Push | Style::Shift)
    }

    /// Whether opening a panel of this style translates the panel itself
    pub fn moves_panel(&self) -> bool {
        matches!(self, Style::Push | Style::Overlay | Style::Shift)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reveal" => Ok(Style::Reveal),
            "push" => Ok(Style::Push),
            "overlay" => Ok(Style::Overlay),
            "shift" => Ok(Style::Shift),
            other => Err(PanelError::invalid(format!("unknown style '{}'", other))),
        }
    }
}

/// Unique identifier for a registered panel
///
/// Never empty and never contains whitespace, so it always survives the
/// space-separated markup triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Result<Self, PanelError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PanelError::invalid("missing id"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(PanelError::invalid(format!("id '{}' contains whitespace", id)));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PanelId {
    type Error = PanelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PanelId::new(value)
    }
}

impl From<PanelId> for String {
    fn from(id: PanelId) -> Self {
        id.0
    }
}

impl std::borrow::Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Validated `id side style` triple
///
/// Built once at the boundary (markup discovery or `create`) so the
/// registry never sees an unchecked side or style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: PanelId,
    pub side: Side,
    pub style: Style,
}

impl PanelSpec {
    /// Validate three loose strings, as passed to `create`
    pub fn parse_parts(id: &str, side: &str, style: &str) -> Result<Self, PanelError> {
        Ok(Self {
            id: PanelId::new(id)?,
            side: side.parse()?,
            style: style.parse()?,
        })
    }

    /// Render as the markup attribute value, e.g. `"nav left push"`
    pub fn marker(&self) -> String {
        format!("{} {} {}", self.id, self.side, self.style)
    }
}

impl FromStr for PanelSpec {
    type Err = PanelError;

    /// Parse the markup triple. Tokens after the third are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let id = parts.next().unwrap_or_default();
        let side = parts
            .next()
            .ok_or_else(|| PanelError::invalid(format!("missing side in '{}'", s)))?;
        let style = parts
            .next()
            .ok_or_else(|| PanelError::invalid(format!("missing style in '{}'", s)))?;
        Self::parse_parts(id, side, style)
    }
}

/// Transition state of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelState {
    /// Whether the panel is at rest or heading towards open
    pub fn is_heading_open(&self) -> bool {
        matches!(self, PanelState::Open | PanelState::Opening)
    }
}

/// Direction of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

impl Direction {
    /// State a panel is in while this transition runs
    pub fn pending_state(&self) -> PanelState {
        match self {
            Direction::Open => PanelState::Opening,
            Direction::Close => PanelState::Closing,
        }
    }

    /// State a panel lands in when this transition completes
    pub fn settled_state(&self) -> PanelState {
        match self {
            Direction::Open => PanelState::Open,
            Direction::Close => PanelState::Closed,
        }
    }
}

/// A registered off-canvas panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: PanelId,
    pub side: Side,
    pub style: Style,
    /// Handle to the surface node; the panel does not own its lifecycle
    pub element: ElementId,
    pub state: PanelState,
    /// Set only when a transition completes: true after an open, false
    /// after a close. A close issued mid-opening never makes it true.
    pub active: bool,
    /// Token of the most recent transition; older completions are stale
    pub generation: u64,
}

impl Panel {
    pub fn new(spec: PanelSpec, element: ElementId) -> Self {
        Self {
            id: spec.id,
            side: spec.side,
            style: spec.style,
            element,
            state: PanelState::Closed,
            active: false,
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_properties() {
        assert_eq!(Side::Left.extent_property(), "width");
        assert_eq!(Side::Right.extent_property(), "width");
        assert_eq!(Side::Top.extent_property(), "height");
        assert_eq!(Side::Bottom.margin_property(), "margin-bottom");
    }

    #[test]
    fn test_style_element_sets() {
        assert!(Style::Reveal.moves_canvas() && !Style::Reveal.moves_panel());
        assert!(Style::Push.moves_canvas() && Style::Push.moves_panel());
        assert!(!Style::Overlay.moves_canvas() && Style::Overlay.moves_panel());
        assert!(Style::Shift.moves_canvas() && Style::Shift.moves_panel());
    }

    #[test]
    fn test_spec_parses_markup_triple() {
        let spec: PanelSpec = "nav left push".parse().unwrap();
        assert_eq!(spec.id.as_str(), "nav");
        assert_eq!(spec.side, Side::Left);
        assert_eq!(spec.style, Style::Push);
        assert_eq!(spec.marker(), "nav left push");
    }

    #[test]
    fn test_spec_ignores_trailing_tokens() {
        let spec: PanelSpec = "nav  right   overlay extra".parse().unwrap();
        assert_eq!(spec.side, Side::Right);
        assert_eq!(spec.style, Style::Overlay);
    }

    #[test]
    fn test_spec_rejects_bad_parts() {
        assert!(matches!(
            "".parse::<PanelSpec>(),
            Err(PanelError::InvalidSpec { .. })
        ));
        assert!(matches!(
            "nav middle push".parse::<PanelSpec>(),
            Err(PanelError::InvalidSpec { .. })
        ));
        assert!(matches!(
            "nav left slide".parse::<PanelSpec>(),
            Err(PanelError::InvalidSpec { .. })
        ));
        assert!(matches!(
            "nav left".parse::<PanelSpec>(),
            Err(PanelError::InvalidSpec { .. })
        ));
        assert!(PanelSpec::parse_parts("", "left", "push").is_err());
        assert!(PanelSpec::parse_parts("my nav", "left", "push").is_err());
    }

    #[test]
    fn test_state_heading() {
        assert!(PanelState::Open.is_heading_open());
        assert!(!PanelState::Closed.is_heading_open());
        assert!(PanelState::Opening.is_heading_open());
        assert!(!PanelState::Closing.is_heading_open());
    }
}
