//! Voice generation request/result types.

use super::actor::ActorId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_EMOTIONAL_LEVEL: f32 = 0.1;
pub const DEFAULT_SOUND_DURATION: f32 = 0.1;

/// Output audio container requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }
}

/// Parameters for one synthesis call. Built fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub actor_id: ActorId,
    pub script: String,
    pub format: AudioFormat,
    pub speed: f32,
    pub emotional_level: f32,
    pub sound_duration: f32,
}

impl GenerationRequest {
    /// Request with the fixed synthesis parameters.
    pub fn new(actor_id: ActorId, script: impl Into<String>) -> Self {
        Self {
            actor_id,
            script: script.into(),
            format: AudioFormat::Mp3,
            speed: DEFAULT_SPEED,
            emotional_level: DEFAULT_EMOTIONAL_LEVEL,
            sound_duration: DEFAULT_SOUND_DURATION,
        }
    }
}

/// The `generatedVoice` object of a synthesis response.
///
/// A result missing either URL still decodes; [`GenerationResult::asset`]
/// is where it gets rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(rename = "audioFileUrl", default)]
    pub audio_url: Option<String>,
    #[serde(rename = "audioFileDownloadUrl", default)]
    pub download_url: Option<String>,
    /// Raw value; only a JSON number is accepted as a credit balance.
    #[serde(rename = "remainingCredits", default)]
    pub remaining_credits: Option<serde_json::Value>,
}

impl GenerationResult {
    /// The validated asset, if both URLs are present and non-empty.
    pub fn asset(&self) -> Option<GeneratedAsset> {
        let audio_url = self.audio_url.as_deref().filter(|s| !s.is_empty())?;
        let download_url = self.download_url.as_deref().filter(|s| !s.is_empty())?;
        Some(GeneratedAsset {
            audio_url: audio_url.to_string(),
            download_url: download_url.to_string(),
        })
    }

    /// Remaining credits, when the provider reported a number.
    pub fn credits(&self) -> Option<f64> {
        crate::balance::numeric_credits(self.remaining_credits.as_ref())
    }

    /// Names of the URL fields that are missing, for error reporting.
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.audio_url.as_deref().map_or(true, str::is_empty) {
            missing.push("audioFileUrl");
        }
        if self.download_url.as_deref().map_or(true, str::is_empty) {
            missing.push("audioFileDownloadUrl");
        }
        missing
    }
}

/// Playable and downloadable references to a generated voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub audio_url: String,
    pub download_url: String,
}

/// Generation lifecycle. `Ready` may re-enter `Generating`; nothing is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Ready,
}
