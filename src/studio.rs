//! 会话门面：组合声优目录、选择器、生成控制器与余额跟踪器。
//!
//! One [`VoiceStudio`] per user session. It owns the four workflow components
//! and is the command surface a display layer drives: `load`, `select`,
//! `generate`, `refresh_balance`. Everything else flows back out as
//! [`StudioEvent`](crate::types::StudioEvent)s through the configured sink.

use crate::balance::BalanceTracker;
use crate::catalog::ActorCatalog;
use crate::config::StudioConfig;
use crate::controller::{GenerationOutcome, RejectReason, VoiceGenerationController};
use crate::events::{noop_sink, EventSink};
use crate::selector::ActorSelector;
use crate::transport::{HttpTransport, ProviderTransport};
use crate::types::VoiceActor;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// Outcome of the initial (or a repeated) session load.
///
/// Both parts are independent; either may fail without affecting the other.
#[derive(Debug)]
pub struct LoadReport {
    /// Number of actors now in the catalog.
    pub actors: Result<usize>,
    pub balance: Result<f64>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.actors.is_ok() && self.balance.is_ok()
    }
}

pub struct VoiceStudio {
    catalog: Arc<ActorCatalog>,
    selector: ActorSelector,
    controller: VoiceGenerationController,
    balance: Arc<BalanceTracker>,
}

impl VoiceStudio {
    /// Session over HTTP, notifying `sink`.
    pub fn new(config: &StudioConfig, sink: Arc<dyn EventSink>) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        Ok(Self::with_transport(transport, sink))
    }

    pub fn with_transport(transport: Arc<dyn ProviderTransport>, sink: Arc<dyn EventSink>) -> Self {
        let catalog = Arc::new(ActorCatalog::new(transport.clone()));
        let balance = Arc::new(BalanceTracker::new(transport.clone(), sink.clone()));
        let selector = ActorSelector::new(catalog.clone(), sink.clone());
        let controller = VoiceGenerationController::new(transport, balance.clone(), sink);
        Self {
            catalog,
            selector,
            controller,
            balance,
        }
    }

    /// Session that discards notifications.
    pub fn without_events(transport: Arc<dyn ProviderTransport>) -> Self {
        Self::with_transport(transport, noop_sink())
    }

    /// Fetch the catalog and balance concurrently, then select the first actor.
    ///
    /// Ordering: catalog replaced, first actor selected (`SelectionChanged`
    /// emitted), then this returns and the caller renders the list.
    pub async fn load(&self) -> LoadReport {
        let (actors, balance) = tokio::join!(self.catalog.fetch_all(), self.balance.fetch_balance());
        self.selector.on_catalog_loaded();
        LoadReport {
            actors: actors.map(|a| a.len()),
            balance,
        }
    }

    pub fn select(&self, id: &str) -> Option<VoiceActor> {
        self.selector.select(id)
    }

    /// Generate for an explicit actor; unknown ids are rejected without a request.
    pub async fn generate(&self, actor_id: &str, script: &str) -> Result<GenerationOutcome> {
        if !self.catalog.contains(actor_id) {
            debug!(actor = actor_id, "ignoring generate for unknown actor");
            return Ok(GenerationOutcome::Rejected(RejectReason::UnknownActor));
        }
        self.controller.generate(actor_id, script).await
    }

    /// Generate for whoever is currently selected.
    pub async fn generate_selected(&self, script: &str) -> Result<GenerationOutcome> {
        match self.selector.current_id() {
            Some(id) => self.generate(id.as_str(), script).await,
            None => Ok(GenerationOutcome::Rejected(RejectReason::NoSelection)),
        }
    }

    pub async fn refresh_balance(&self) -> Result<f64> {
        self.balance.fetch_balance().await
    }

    pub fn catalog(&self) -> &ActorCatalog {
        &self.catalog
    }

    pub fn selector(&self) -> &ActorSelector {
        &self.selector
    }

    pub fn controller(&self) -> &VoiceGenerationController {
        &self.controller
    }

    pub fn balance(&self) -> &BalanceTracker {
        &self.balance
    }
}
