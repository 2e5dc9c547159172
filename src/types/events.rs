//! Change notifications raised by the workflow components.

use super::actor::VoiceActor;
use super::generation::{GeneratedAsset, GenerationState};
use serde::{Deserialize, Serialize};

/// Unified change-notification enum consumed by display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum StudioEvent {
    /// The focused persona changed.
    #[serde(rename = "SelectionChanged")]
    SelectionChanged { actor: VoiceActor },

    /// The generation controller moved to a new state.
    ///
    /// `asset` is the currently exposed asset (kept across failures).
    /// `failure` is set when the transition back to `Idle` was caused by an error.
    #[serde(rename = "GenerationStateChanged")]
    GenerationStateChanged {
        state: GenerationState,
        #[serde(skip_serializing_if = "Option::is_none")]
        asset: Option<GeneratedAsset>,
        #[serde(skip_serializing_if = "Option::is_none")]
        failure: Option<String>,
    },

    /// The known credit balance was updated.
    #[serde(rename = "BalanceChanged")]
    BalanceChanged { value: f64 },
}

impl StudioEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            StudioEvent::GenerationStateChanged {
                failure: Some(_),
                ..
            }
        )
    }
}
