//! Public controller API
//!
//! `Slidebars` owns one `OffCanvas` model and its timers. Every call turns
//! into a `Msg`, runs through `update`, and queues whatever `Cmd` comes
//! back. Completions fire from `advance`/`settle`.

use std::time::Duration;

use super::scheduler::Scheduler;
use crate::config::OffCanvasConfig;
use crate::error::PanelError;
use crate::messages::Msg;
use crate::model::OffCanvas;
use crate::panel::{Panel, PanelId, PanelState};
use crate::surface::{ElementQuery, Surface};
use crate::update::update;

/// Off-canvas panel controller for one document
#[derive(Debug, Clone)]
pub struct Slidebars<D> {
    model: OffCanvas<D>,
    scheduler: Scheduler,
}

impl<D: Surface + ElementQuery> Slidebars<D> {
    pub fn new(document: D, config: OffCanvasConfig) -> Self {
        Self {
            model: OffCanvas::new(document, config),
            scheduler: Scheduler::new(),
        }
    }

    /// Run a message through update and queue its timers
    pub fn dispatch(&mut self, msg: Msg) -> Result<(), PanelError> {
        if let Some(cmd) = update(&mut self.model, msg)? {
            self.scheduler.schedule(cmd);
        }
        Ok(())
    }

    /// Register every panel declared in markup and lay them out
    pub fn init(&mut self) -> Result<(), PanelError> {
        self.dispatch(Msg::Init)
    }

    pub fn open(&mut self, id: &str) -> Result<(), PanelError> {
        self.dispatch(Msg::Open(id.to_string()))
    }

    /// Close one panel, or every open panel when `id` is `None`
    pub fn close(&mut self, id: Option<&str>) -> Result<(), PanelError> {
        self.dispatch(Msg::Close(id.map(str::to_string)))
    }

    pub fn toggle(&mut self, id: &str) -> Result<(), PanelError> {
        self.dispatch(Msg::Toggle(id.to_string()))
    }

    /// Whether the panel's last completed transition opened it
    pub fn is_active(&self, id: &str) -> Result<bool, PanelError> {
        Ok(self.model.registry.lookup(id)?.active)
    }

    pub fn state(&self, id: &str) -> Result<PanelState, PanelError> {
        Ok(self.model.registry.lookup(id)?.state)
    }

    pub fn panel(&self, id: &str) -> Result<&Panel, PanelError> {
        self.model.registry.lookup(id)
    }

    pub fn create(
        &mut self,
        id: &str,
        side: &str,
        style: &str,
        content: Option<&str>,
    ) -> Result<(), PanelError> {
        self.dispatch(Msg::Create {
            id: id.to_string(),
            side: side.to_string(),
            style: style.to_string(),
            content: content.map(str::to_string),
        })
    }

    pub fn destroy(&mut self, id: &str) -> Result<(), PanelError> {
        self.dispatch(Msg::Destroy(id.to_string()))
    }

    /// Advance the clock and apply every completion that came due
    pub fn advance(&mut self, elapsed: Duration) {
        for msg in self.scheduler.advance(elapsed) {
            let name = msg.name();
            if let Err(e) = self.dispatch(msg) {
                tracing::warn!("Failed to apply {}: {}", name, e);
            }
        }
    }

    /// Advance until no transitions are pending
    pub fn settle(&mut self) {
        while let Some(remaining) = self.scheduler.time_until_next() {
            self.advance(remaining);
        }
    }

    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.model.registry.ids()
    }

    pub fn states(&self) -> Vec<(PanelId, PanelState)> {
        self.model.states()
    }

    pub fn model(&self) -> &OffCanvas<D> {
        &self.model
    }

    pub fn document(&self) -> &D {
        &self.model.document
    }

    /// Mutable access for callers that restyle the page between operations
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.model.document
    }
}
