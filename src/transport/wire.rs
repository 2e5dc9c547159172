//! Provider response envelopes and request bodies.

use crate::types::{GenerationRequest, GenerationResult, VoiceActor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct VoiceActorsEnvelope {
    #[serde(rename = "voiceActors")]
    pub voice_actors: Vec<VoiceActor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedVoiceEnvelope {
    // Missing object decodes as an empty (malformed) result.
    #[serde(rename = "generatedVoice", default)]
    pub generated_voice: GenerationResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BalancesEnvelope {
    pub balances: Balances,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Balances {
    #[serde(rename = "remainingBalance")]
    pub remaining_balance: f64,
}

/// Body of `POST /voice-actors/{id}/generate-voice`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateVoiceBody<'a> {
    pub format: &'static str,
    pub speed: String,
    pub emotional_level: String,
    pub sound_duration: String,
    pub script: &'a str,
}

impl<'a> From<&'a GenerationRequest> for GenerateVoiceBody<'a> {
    fn from(req: &'a GenerationRequest) -> Self {
        Self {
            format: req.format.as_str(),
            speed: decimal(req.speed),
            emotional_level: decimal(req.emotional_level),
            sound_duration: decimal(req.sound_duration),
            script: &req.script,
        }
    }
}

/// Decimal string form the provider expects ("1.0", not "1").
fn decimal(v: f32) -> String {
    let s = v.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}
