//! Voice actor (persona) definitions as returned by `GET /voice-actors`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Prompt shown in the script box when a persona has no sample script.
pub const DEFAULT_SCRIPT_PLACEHOLDER: &str = "台本を入力してください";

/// Stable, unique identifier of a voice actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ActorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A selectable synthesis identity with display metadata.
///
/// Field names follow the provider's wire format. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceActor {
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "smallImageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub sample_script: String,
    /// Sample audio; the display plays it until a voice has been generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_voice_url: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
}

impl VoiceActor {
    /// Text to pre-fill the script box with.
    pub fn script_placeholder(&self) -> &str {
        if self.sample_script.trim().is_empty() {
            DEFAULT_SCRIPT_PLACEHOLDER
        } else {
            &self.sample_script
        }
    }
}
