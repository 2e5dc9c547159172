//! Wire-level tests for HttpTransport

use crate::integration::mock_server::{actors_body, balance_body, MockServerFixture};
use voice_actor_studio::transport::ProviderTransport;
use voice_actor_studio::{ActorId, Error, GenerationRequest};

#[tokio::test]
async fn test_fetch_actors_decodes_roster() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_json("GET", "/voice-actors", 200, actors_body()).await;

    let actors = fixture.transport().fetch_actors().await.unwrap();
    mock.assert_async().await;

    assert_eq!(actors.len(), 2);
    assert_eq!(actors[0].id, ActorId::from("a1"));
    assert_eq!(actors[0].image_url, "https://img.example/a1.png");
    assert_eq!(actors[1].sample_voice_url, None);
    assert_eq!(actors[1].age, 31);
}

#[tokio::test]
async fn test_generate_sends_fixed_parameters() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_generate(
            "a2",
            "hello world",
            200,
            serde_json::json!({
                "generatedVoice": {
                    "audioFileUrl": "u1",
                    "audioFileDownloadUrl": "d1",
                    "duration": 1530,
                    "remainingCredits": 42
                }
            }),
        )
        .await;

    let request = GenerationRequest::new(ActorId::from("a2"), "hello world");
    let result = fixture.transport().generate_voice(&request).await.unwrap();
    mock.assert_async().await;

    assert_eq!(result.asset().unwrap().audio_url, "u1");
    assert_eq!(result.credits(), Some(42.0));
}

#[tokio::test]
async fn test_fetch_balance() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json("GET", "/balances", 200, balance_body(880.0)).await;
    assert_eq!(fixture.transport().fetch_balance().await.unwrap(), 880.0);
}

#[tokio::test]
async fn test_non_success_status_is_remote_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/balances",
            401,
            serde_json::json!({ "message": "invalid api key" }),
        )
        .await;

    match fixture.transport().fetch_balance().await {
        Err(Error::Remote { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid api key"));
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_envelope_is_serialization_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/voice-actors", 200, serde_json::json!({ "actors": [] }))
        .await;
    assert!(matches!(
        fixture.transport().fetch_actors().await,
        Err(Error::Serialization(_))
    ));
}
