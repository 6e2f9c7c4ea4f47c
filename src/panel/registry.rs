//! Panel registry - id to panel mapping with uniqueness checks

use std::collections::HashMap;

use super::types::{Panel, PanelId, PanelSpec};
use crate::error::PanelError;
use crate::surface::ElementId;

/// All registered panels, keyed by id
#[derive(Debug, Clone, Default)]
pub struct Registry {
    panels: HashMap<PanelId, Panel>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel in the closed state
    ///
    /// Side and style are already validated by `PanelSpec`, so the only
    /// failure left here is an id collision.
    pub fn register(&mut self, spec: PanelSpec, element: ElementId) -> Result<&Panel, PanelError> {
        if self.panels.contains_key(&spec.id) {
            return Err(PanelError::DuplicateId(spec.id));
        }
        let id = spec.id.clone();
        let panel: &Panel = self.panels.entry(id).or_insert(Panel::new(spec, element));
        Ok(panel)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    pub fn lookup(&self, id: &str) -> Result<&Panel, PanelError> {
        self.panels.get(id).ok_or_else(|| PanelError::not_found(id))
    }

    pub fn lookup_mut(&mut self, id: &str) -> Result<&mut Panel, PanelError> {
        self.panels
            .get_mut(id)
            .ok_or_else(|| PanelError::not_found(id))
    }

    /// Remove a panel, handing it back so the caller can tear down its node
    pub fn remove(&mut self, id: &str) -> Result<Panel, PanelError> {
        self.panels
            .remove(id)
            .ok_or_else(|| PanelError::not_found(id))
    }

    /// Iterate over all panels in arbitrary order
    pub fn all(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self.panels.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
