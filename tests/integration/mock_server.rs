//! Mock provider server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;
use std::sync::Arc;
use voice_actor_studio::events::InMemoryEventSink;
use voice_actor_studio::transport::HttpTransport;
use voice_actor_studio::{StudioConfig, VoiceStudio};

pub const API_KEY: &str = "test-api-key";

/// Test fixture that manages a mock provider
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn config(&self) -> StudioConfig {
        StudioConfig::new(API_KEY)
            .with_base_url(&self.base_url)
            .with_timeout_secs(5)
    }

    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(&self.config()).expect("transport")
    }

    pub fn studio(&self) -> (VoiceStudio, Arc<InMemoryEventSink>) {
        let sink = Arc::new(InMemoryEventSink::new());
        let studio = VoiceStudio::new(&self.config(), sink.clone()).expect("studio");
        (studio, sink)
    }

    /// Authenticated JSON response for `method path`.
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: Value) -> Mock {
        self.server
            .mock(method, path)
            .match_header("x-api-key", API_KEY)
            .match_header("accept", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Generate endpoint that also checks the request body.
    pub async fn mock_generate(&mut self, actor_id: &str, script: &str, status: usize, body: Value) -> Mock {
        self.server
            .mock("POST", format!("/voice-actors/{}/generate-voice", actor_id).as_str())
            .match_header("x-api-key", API_KEY)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "format": "mp3",
                "speed": "1.0",
                "emotionalLevel": "0.1",
                "soundDuration": "0.1",
                "script": script
            })))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Catch-all generate mock that must never be hit.
    pub async fn mock_generate_never(&mut self) -> Mock {
        self.server
            .mock("POST", Matcher::Regex(r"^/voice-actors/.*/generate-voice$".to_string()))
            .expect(0)
            .create_async()
            .await
    }
}

pub fn actors_body() -> Value {
    serde_json::json!({
        "voiceActors": [
            {
                "id": "a1",
                "name": "Alice",
                "smallImageUrl": "https://img.example/a1.png",
                "sampleScript": "こんにちは",
                "sampleVoiceUrl": "https://voice.example/a1.mp3",
                "age": 22,
                "gender": "FEMALE"
            },
            {
                "id": "a2",
                "name": "Bob",
                "smallImageUrl": "https://img.example/a2.png",
                "sampleScript": "",
                "age": 31,
                "gender": "MALE"
            }
        ]
    })
}

pub fn balance_body(value: f64) -> Value {
    serde_json::json!({ "balances": { "remainingBalance": value } })
}
