//! Voice generation workflow.
//!
//! ```text
//!   Idle ──generate──▶ Generating ──well-formed──▶ Ready
//!    ▲                    │                          │
//!    └──malformed/error───┘ ◀────────generate────────┘
//! ```
//!
//! At most one request is in flight per controller. A second `generate` while
//! one is outstanding is rejected, not queued. "In flight" is exactly
//! `state == Generating`; both are read and written under the same lock, and
//! every state change is emitted before that lock is released.

use crate::balance::BalanceTracker;
use crate::events::EventSink;
use crate::transport::ProviderTransport;
use crate::types::{ActorId, GeneratedAsset, GenerationRequest, GenerationState, StudioEvent};
use crate::{Error, ErrorContext, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Why a `generate` call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Script was empty or whitespace only.
    BlankScript,
    /// Another generation is still outstanding.
    InFlight,
    /// Actor id is not in the catalog.
    UnknownActor,
    /// Nothing is selected.
    NoSelection,
}

/// Result of a `generate` call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed(GeneratedAsset),
    /// Validation rejection; no request was issued and no state changed.
    Rejected(RejectReason),
}

#[derive(Debug, Default)]
struct Slot {
    state: GenerationState,
    asset: Option<GeneratedAsset>,
}

pub struct VoiceGenerationController {
    transport: Arc<dyn ProviderTransport>,
    balance: Arc<BalanceTracker>,
    sink: Arc<dyn EventSink>,
    slot: Mutex<Slot>,
}

/// Returns a still-`Generating` controller to `Idle` when the generation
/// future is dropped before the provider answered.
struct InFlightGuard<'a> {
    controller: &'a VoiceGenerationController,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let c = self.controller;
        let mut slot = c.slot();
        if slot.state != GenerationState::Generating {
            return;
        }
        slot.state = GenerationState::Idle;
        warn!("generation abandoned before the provider answered");
        c.sink.emit(StudioEvent::GenerationStateChanged {
            state: GenerationState::Idle,
            asset: slot.asset.clone(),
            failure: Some("generation abandoned".to_string()),
        });
    }
}

impl VoiceGenerationController {
    pub fn new(
        transport: Arc<dyn ProviderTransport>,
        balance: Arc<BalanceTracker>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            transport,
            balance,
            sink,
            slot: Mutex::new(Slot::default()),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> GenerationState {
        self.slot().state
    }

    /// Last successfully generated asset; survives later failures.
    pub fn asset(&self) -> Option<GeneratedAsset> {
        self.slot().asset.clone()
    }

    pub fn is_generating(&self) -> bool {
        self.state() == GenerationState::Generating
    }

    /// Synthesize `script` with the persona `actor_id`.
    ///
    /// Blank scripts and calls made while another generation is outstanding
    /// return [`GenerationOutcome::Rejected`] without touching any state.
    /// Transport failures and malformed results return the controller to
    /// `Idle`, keep the previously exposed asset, and come back as
    /// [`Error::Generation`].
    pub async fn generate(&self, actor_id: &str, script: &str) -> Result<GenerationOutcome> {
        if script.trim().is_empty() {
            debug!(actor = actor_id, "ignoring generate with blank script");
            return Ok(GenerationOutcome::Rejected(RejectReason::BlankScript));
        }
        {
            let mut slot = self.slot();
            if slot.state == GenerationState::Generating {
                info!(actor = actor_id, "generation already in flight; rejecting");
                return Ok(GenerationOutcome::Rejected(RejectReason::InFlight));
            }
            slot.state = GenerationState::Generating;
            self.sink.emit(StudioEvent::GenerationStateChanged {
                state: GenerationState::Generating,
                asset: slot.asset.clone(),
                failure: None,
            });
        }
        let _guard = InFlightGuard { controller: self };

        let request = GenerationRequest::new(ActorId::from(actor_id), script);
        info!(actor = actor_id, "generating voice");
        let result = match self.transport.generate_voice(&request).await {
            Ok(result) => result,
            Err(e) => return Err(self.fail(e.into_generation(actor_id))),
        };

        let Some(asset) = result.asset() else {
            let missing = result.missing_fields().join(", ");
            return Err(self.fail(Error::generation_with_context(
                "malformed generation result",
                ErrorContext::new()
                    .with_field_path(format!("generatedVoice.{{{}}}", missing))
                    .with_source("generation")
                    .with_details(format!("actor: {}", actor_id)),
            )));
        };

        // Balance first, so anyone who sees `Ready` also sees the new credits.
        if let Some(credits) = result.credits() {
            self.balance.set_balance(Some(credits));
        }
        info!(actor = actor_id, audio_url = %asset.audio_url, "voice generated");
        {
            let mut slot = self.slot();
            slot.state = GenerationState::Ready;
            slot.asset = Some(asset.clone());
            self.sink.emit(StudioEvent::GenerationStateChanged {
                state: GenerationState::Ready,
                asset: Some(asset.clone()),
                failure: None,
            });
        }
        Ok(GenerationOutcome::Completed(asset))
    }

    /// `Generating → Idle`, leaving the exposed asset alone.
    fn fail(&self, err: Error) -> Error {
        warn!(error = %err, "voice generation failed");
        let mut slot = self.slot();
        slot.state = GenerationState::Idle;
        self.sink.emit(StudioEvent::GenerationStateChanged {
            state: GenerationState::Idle,
            asset: slot.asset.clone(),
            failure: Some(err.to_string()),
        });
        drop(slot);
        err
    }
}
