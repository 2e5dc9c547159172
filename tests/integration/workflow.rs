//! Session workflow against a mock provider

use crate::integration::mock_server::{actors_body, balance_body, MockServerFixture};
use voice_actor_studio::{
    ActorId, ErrorKind, GeneratedAsset, GenerationOutcome, GenerationState, RejectReason,
    StudioEvent,
};

#[tokio::test]
async fn test_select_then_generate_updates_asset_and_balance() {
    let mut fixture = MockServerFixture::new().await;
    let _actors = fixture.mock_json("GET", "/voice-actors", 200, actors_body()).await;
    let _balance = fixture.mock_json("GET", "/balances", 200, balance_body(100.0)).await;
    let generate = fixture
        .mock_generate(
            "a2",
            "hello world",
            200,
            serde_json::json!({
                "generatedVoice": {
                    "audioFileUrl": "u1",
                    "audioFileDownloadUrl": "d1",
                    "remainingCredits": 42
                }
            }),
        )
        .await;

    let (studio, sink) = fixture.studio();
    let report = studio.load().await;
    assert!(report.is_complete());
    assert_eq!(studio.selector().current_id(), Some(ActorId::from("a1")));

    studio.select("a2").unwrap();
    assert_eq!(studio.selector().current_id(), Some(ActorId::from("a2")));

    let outcome = studio.generate("a2", "hello world").await.unwrap();
    generate.assert_async().await;

    let expected = GeneratedAsset {
        audio_url: "u1".into(),
        download_url: "d1".into(),
    };
    assert_eq!(outcome, GenerationOutcome::Completed(expected.clone()));
    assert_eq!(studio.controller().state(), GenerationState::Ready);
    assert_eq!(studio.controller().asset(), Some(expected));
    assert_eq!(studio.balance().value(), Some(42.0));

    let selections: Vec<String> = sink
        .events()
        .into_iter()
        .filter_map(|e| match e {
            StudioEvent::SelectionChanged { actor } => Some(actor.name),
            _ => None,
        })
        .collect();
    assert_eq!(selections, vec!["Alice".to_string(), "Bob".to_string()]);
}

#[tokio::test]
async fn test_malformed_result_keeps_previous_asset() {
    let mut fixture = MockServerFixture::new().await;
    let _actors = fixture.mock_json("GET", "/voice-actors", 200, actors_body()).await;
    let _balance = fixture.mock_json("GET", "/balances", 200, balance_body(100.0)).await;
    let _ok = fixture
        .mock_generate(
            "a1",
            "first",
            200,
            serde_json::json!({
                "generatedVoice": { "audioFileUrl": "u1", "audioFileDownloadUrl": "d1" }
            }),
        )
        .await;
    let _malformed = fixture
        .mock_generate(
            "a1",
            "second",
            200,
            serde_json::json!({
                "generatedVoice": { "audioFileUrl": "u2", "remainingCredits": 10 }
            }),
        )
        .await;

    let (studio, _sink) = fixture.studio();
    studio.load().await;
    studio.generate_selected("first").await.unwrap();

    let err = studio.generate_selected("second").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generation);
    assert_eq!(studio.controller().state(), GenerationState::Idle);
    assert_eq!(
        studio.controller().asset().map(|a| a.download_url),
        Some("d1".to_string())
    );
    assert_eq!(studio.balance().value(), Some(100.0));
}

#[tokio::test]
async fn test_remote_failure_is_generation_error() {
    let mut fixture = MockServerFixture::new().await;
    let _actors = fixture.mock_json("GET", "/voice-actors", 200, actors_body()).await;
    let _balance = fixture.mock_json("GET", "/balances", 200, balance_body(3.0)).await;
    let _fail = fixture
        .mock_generate(
            "a1",
            "hi",
            402,
            serde_json::json!({ "message": "insufficient credits" }),
        )
        .await;

    let (studio, _sink) = fixture.studio();
    studio.load().await;
    let err = studio.generate_selected("hi").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generation);
    assert!(err.to_string().contains("402"));
    assert_eq!(studio.controller().state(), GenerationState::Idle);
}

#[tokio::test]
async fn test_blank_script_and_unknown_actor_never_hit_provider() {
    let mut fixture = MockServerFixture::new().await;
    let _actors = fixture.mock_json("GET", "/voice-actors", 200, actors_body()).await;
    let _balance = fixture.mock_json("GET", "/balances", 200, balance_body(3.0)).await;
    let never = fixture.mock_generate_never().await;

    let (studio, _sink) = fixture.studio();
    studio.load().await;

    assert_eq!(
        studio.generate("a1", "   ").await.unwrap(),
        GenerationOutcome::Rejected(RejectReason::BlankScript)
    );
    assert_eq!(
        studio.generate("nobody", "hello").await.unwrap(),
        GenerationOutcome::Rejected(RejectReason::UnknownActor)
    );
    assert!(studio.select("nobody").is_none());
    assert_eq!(studio.selector().current_id(), Some(ActorId::from("a1")));
    never.assert_async().await;
}

#[tokio::test]
async fn test_catalog_failure_leaves_session_usable() {
    let mut fixture = MockServerFixture::new().await;
    let _actors = fixture
        .mock_json("GET", "/voice-actors", 500, serde_json::json!({ "message": "down" }))
        .await;
    let _balance = fixture.mock_json("GET", "/balances", 200, balance_body(9.0)).await;

    let (studio, _sink) = fixture.studio();
    let report = studio.load().await;
    assert_eq!(report.actors.unwrap_err().kind(), ErrorKind::Fetch);
    assert_eq!(report.balance.unwrap(), 9.0);
    assert!(studio.catalog().is_empty());
    assert!(studio.selector().current().is_none());
}
