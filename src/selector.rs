//! Which single persona is currently focused.

use crate::catalog::ActorCatalog;
use crate::events::EventSink;
use crate::types::{ActorId, StudioEvent, VoiceActor};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Tracks the focused persona by id; actor data is always read back from the
/// catalog, never copied.
pub struct ActorSelector {
    catalog: Arc<ActorCatalog>,
    current: Mutex<Option<ActorId>>,
    sink: Arc<dyn EventSink>,
}

impl ActorSelector {
    pub fn new(catalog: Arc<ActorCatalog>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            catalog,
            current: Mutex::new(None),
            sink,
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<ActorId>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Focus the first persona of a freshly loaded catalog.
    ///
    /// An empty catalog leaves nothing selected.
    pub fn on_catalog_loaded(&self) -> Option<VoiceActor> {
        match self.catalog.first() {
            Some(actor) => {
                debug!(actor = %actor.id, "auto-selected first actor");
                self.store_and_emit(&actor);
                Some(actor)
            }
            None => {
                *self.slot() = None;
                None
            }
        }
    }

    /// Focus `id` if the catalog knows it.
    ///
    /// Unknown ids are silently ignored: the current selection is kept and
    /// `None` is returned.
    pub fn select(&self, id: &str) -> Option<VoiceActor> {
        let Some(actor) = self.catalog.get(id) else {
            debug!(actor = id, "ignoring selection of unknown actor");
            return None;
        };
        self.store_and_emit(&actor);
        Some(actor)
    }

    // Emit under the lock so concurrent selections notify in store order.
    fn store_and_emit(&self, actor: &VoiceActor) {
        let mut slot = self.slot();
        *slot = Some(actor.id.clone());
        self.sink.emit(StudioEvent::SelectionChanged {
            actor: actor.clone(),
        });
    }

    pub fn current_id(&self) -> Option<ActorId> {
        self.slot().clone()
    }

    /// Current persona as held by the catalog right now.
    pub fn current(&self) -> Option<VoiceActor> {
        let id = self.current_id()?;
        self.catalog.get(id.as_str())
    }
}
