//! Scripted in-process transport for unit tests.

use super::ProviderTransport;
use crate::types::{ActorId, GenerationRequest, GenerationResult, VoiceActor};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

pub(crate) fn actor(id: &str, name: &str) -> VoiceActor {
    VoiceActor {
        id: ActorId::from(id),
        name: name.to_string(),
        image_url: format!("https://img.example/{}.png", id),
        sample_script: String::new(),
        sample_voice_url: Some(format!("https://voice.example/{}.mp3", id)),
        age: 20,
        gender: "FEMALE".to_string(),
    }
}

pub(crate) fn result(audio: &str, download: &str, credits: Option<serde_json::Value>) -> GenerationResult {
    GenerationResult {
        audio_url: Some(audio.to_string()),
        download_url: Some(download.to_string()),
        remaining_credits: credits,
    }
}

fn unavailable() -> Error {
    Error::Remote {
        status: 503,
        message: "unavailable".to_string(),
    }
}

#[derive(Default)]
pub(crate) struct FakeTransport {
    /// `None` fails the call.
    pub actors: Mutex<Option<Vec<VoiceActor>>>,
    pub balance: Mutex<Option<f64>>,
    /// Replies consumed in order; `None` or an empty queue fails the call.
    pub replies: Mutex<VecDeque<Option<GenerationResult>>>,
    pub requests: Mutex<Vec<GenerationRequest>>,
    pub generate_calls: AtomicUsize,
    /// When set, `generate_voice` signals `started` then waits for `release`.
    pub gated: AtomicBool,
    pub started: Notify,
    pub release: Notify,
}

impl FakeTransport {
    pub fn with_actors(actors: Vec<VoiceActor>) -> Self {
        let fake = Self::default();
        *fake.actors.lock().unwrap() = Some(actors);
        fake
    }

    pub fn set_balance(&self, value: Option<f64>) {
        *self.balance.lock().unwrap() = value;
    }

    pub fn push_reply(&self, reply: Option<GenerationResult>) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl ProviderTransport for FakeTransport {
    async fn fetch_actors(&self) -> Result<Vec<VoiceActor>> {
        self.actors.lock().unwrap().clone().ok_or_else(unavailable)
    }

    async fn generate_voice(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if self.gated.load(Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }
        let reply = self.replies.lock().unwrap().pop_front().flatten();
        reply.ok_or_else(unavailable)
    }

    async fn fetch_balance(&self) -> Result<f64> {
        self.balance.lock().unwrap().ok_or_else(unavailable)
    }
}
