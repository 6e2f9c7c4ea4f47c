//! Off-canvas model - all state owned by one controller instance

use crate::config::OffCanvasConfig;
use crate::error::PanelError;
use crate::panel::{PanelId, PanelSpec, PanelState, Registry};
use crate::surface::{ElementId, ElementQuery, Surface};

/// Main-content elements affected by reveal, push and shift panels
///
/// Established once during init and shared by every panel. Two
/// canvas-moving panels open at the same time both write the canvas
/// transform; only one of them should be open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    /// Every element carrying the canvas attribute, container included
    pub elements: Vec<ElementId>,
    /// The element whose canvas attribute equals the container value
    pub container: Option<ElementId>,
}

impl Canvas {
    pub fn discover<Q: ElementQuery + ?Sized>(query: &Q, config: &OffCanvasConfig) -> Self {
        let elements = query.with_attribute(&config.canvas_attribute);
        let container = elements.iter().copied().find(|&el| {
            query.attribute(el, &config.canvas_attribute).as_deref()
                == Some(config.container_value.as_str())
        });
        Self {
            elements,
            container,
        }
    }
}

/// Model for one page's off-canvas panels
#[derive(Debug, Clone)]
pub struct OffCanvas<D> {
    /// The document the panels live in
    pub document: D,
    pub registry: Registry,
    pub canvas: Canvas,
    pub config: OffCanvasConfig,
    /// Last transition token handed out; shared by all panels so a
    /// recreated id never matches a timer from its previous life
    generation: u64,
}

impl<D: Surface + ElementQuery> OffCanvas<D> {
    pub fn new(document: D, config: OffCanvasConfig) -> Self {
        Self {
            document,
            registry: Registry::new(),
            canvas: Canvas::default(),
            config,
            generation: 0,
        }
    }

    /// Hand out the next transition token
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Read and validate every declared panel without registering any
    ///
    /// Duplicates are checked against the registry and within the markup
    /// itself, so a failure leaves the model untouched.
    pub fn discover_panels(&self) -> Result<Vec<(PanelSpec, ElementId)>, PanelError> {
        let attribute = &self.config.panel_attribute;
        let mut found: Vec<(PanelSpec, ElementId)> = Vec::new();

        for element in self.document.with_attribute(attribute) {
            let marker = self
                .document
                .attribute(element, attribute)
                .unwrap_or_default();
            let spec: PanelSpec = marker.parse()?;

            let seen = found.iter().any(|(other, _)| other.id == spec.id);
            if seen || self.registry.contains(spec.id.as_str()) {
                return Err(PanelError::DuplicateId(spec.id));
            }
            found.push((spec, element));
        }

        Ok(found)
    }

    /// Current state of every panel, sorted by id
    pub fn states(&self) -> Vec<(PanelId, PanelState)> {
        let mut states: Vec<(PanelId, PanelState)> = self
            .registry
            .all()
            .map(|panel| (panel.id.clone(), panel.state))
            .collect();
        states.sort_by(|a, b| a.0.cmp(&b.0));
        states
    }
}
