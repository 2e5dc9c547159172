//! # voice-actor-studio
//!
//! 声优选择与语音生成工作流：浏览声优目录、提交台本、获取生成的语音与剩余额度。
//!
//! Voice actor selection and speech generation workflow over a hosted
//! speech-synthesis provider.
//!
//! ## Overview
//!
//! A session browses a roster of synthetic voice actors, focuses one, submits a
//! script, and receives playable/downloadable audio plus an updated credit
//! balance. The library owns the sequencing: at most one generation in flight,
//! results validated before the exposed asset changes, balance reconciled after
//! each generation. Rendering is left to whatever subscribes to the
//! [`StudioEvent`] notifications.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voice_actor_studio::{events::BroadcastEventSink, StudioConfig, VoiceStudio};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> voice_actor_studio::Result<()> {
//!     let sink = Arc::new(BroadcastEventSink::default());
//!     let mut events = sink.subscribe();
//!     let studio = VoiceStudio::new(&StudioConfig::from_env()?, sink)?;
//!
//!     let report = studio.load().await;
//!     report.actors?;
//!     studio.generate_selected("こんにちは").await?;
//!
//!     while let Ok(event) = events.try_recv() {
//!         println!("{:?}", event);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Roster fetch and snapshots |
//! | [`selector`] | Currently focused actor |
//! | [`controller`] | Generation state machine |
//! | [`balance`] | Last-known-good credit balance |
//! | [`studio`] | Session facade wiring the above |
//! | [`transport`] | Provider REST client |
//! | [`events`] | Change-notification sinks |
//! | [`config`] | Session configuration |
//! | [`types`] | Core data types |

pub mod balance;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod events;
pub mod selector;
pub mod studio;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use balance::BalanceTracker;
pub use catalog::ActorCatalog;
pub use config::StudioConfig;
pub use controller::{GenerationOutcome, RejectReason, VoiceGenerationController};
pub use events::EventSink;
pub use selector::ActorSelector;
pub use studio::{LoadReport, VoiceStudio};
pub use types::{
    ActorId, GeneratedAsset, GenerationRequest, GenerationResult, GenerationState, StudioEvent,
    VoiceActor,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
