//! Voice actor roster.

use crate::transport::ProviderTransport;
use crate::types::VoiceActor;
use crate::Result;
use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Holds the roster as last fetched, in provider order.
///
/// Readers get cheap snapshots; a fetch replaces the whole roster at once, so
/// nobody ever observes a partially populated catalog.
pub struct ActorCatalog {
    transport: Arc<dyn ProviderTransport>,
    actors: ArcSwap<Vec<VoiceActor>>,
}

impl ActorCatalog {
    pub fn new(transport: Arc<dyn ProviderTransport>) -> Self {
        Self {
            transport,
            actors: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Fetch the roster and replace the held one.
    ///
    /// On failure the catalog is left empty and the error is returned as a
    /// fetch error. No retry.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<VoiceActor>>> {
        match self.transport.fetch_actors().await {
            Ok(fetched) => {
                let actors = Arc::new(dedup_by_id(fetched));
                self.actors.store(actors.clone());
                info!(count = actors.len(), "voice actor catalog loaded");
                Ok(actors)
            }
            Err(e) => {
                self.actors.store(Arc::new(Vec::new()));
                warn!(error = %e, "voice actor catalog fetch failed");
                Err(e.into_fetch("catalog"))
            }
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<VoiceActor>> {
        self.actors.load_full()
    }

    pub fn get(&self, id: &str) -> Option<VoiceActor> {
        self.actors
            .load()
            .iter()
            .find(|a| a.id.as_str() == id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actors.load().iter().any(|a| a.id.as_str() == id)
    }

    pub fn first(&self) -> Option<VoiceActor> {
        self.actors.load().first().cloned()
    }

    pub fn len(&self) -> usize {
        self.actors.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keep the first occurrence of each id.
fn dedup_by_id(actors: Vec<VoiceActor>) -> Vec<VoiceActor> {
    let mut seen = HashSet::with_capacity(actors.len());
    let before = actors.len();
    let unique: Vec<VoiceActor> = actors
        .into_iter()
        .filter(|a| seen.insert(a.id.clone()))
        .collect();
    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "duplicate voice actor ids in catalog response"
        );
    }
    unique
}
