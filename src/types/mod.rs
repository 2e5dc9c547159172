//! 类型模块：声优、语音生成请求/结果以及变更通知的核心数据类型。
//!
//! # Types Module
//!
//! Strongly-typed representations of everything that crosses the provider
//! boundary or is handed to a display surface.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`VoiceActor`] | A selectable synthesis persona, as fetched |
//! | [`ActorId`] | Stable, unique persona identifier |
//! | [`GenerationRequest`] | Parameters for one synthesis call |
//! | [`GenerationResult`] | Raw synthesis output, possibly malformed |
//! | [`GeneratedAsset`] | Validated playable/downloadable audio references |
//! | [`StudioEvent`] | Change notification for display surfaces |
//!
//! ## Example
//!
//! ```rust
//! use voice_actor_studio::types::{ActorId, GenerationRequest};
//!
//! let request = GenerationRequest::new(ActorId::from("a1"), "hello world");
//! assert_eq!(request.speed, 1.0);
//! assert_eq!(request.format.as_str(), "mp3");
//! ```

pub mod actor;
pub mod events;
pub mod generation;

pub use actor::{ActorId, VoiceActor};
pub use events::StudioEvent;
pub use generation::{
    AudioFormat, GeneratedAsset, GenerationRequest, GenerationResult, GenerationState,
};
