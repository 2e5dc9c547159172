//! 传输层：与语音合成服务商 REST 接口通信。
//!
//! The workflow components only ever see [`ProviderTransport`]; [`HttpTransport`]
//! is the production implementation over `reqwest`.

pub mod http;
#[cfg(test)]
pub(crate) mod fake;
pub(crate) mod wire;

pub use http::HttpTransport;

use crate::types::{GenerationRequest, GenerationResult, VoiceActor};
use crate::Result;
use async_trait::async_trait;

/// The three provider operations the core depends on.
///
/// Implementations suspend until a response or failure arrives. They do not
/// retry, cancel, or time out on their own beyond what the HTTP client enforces.
#[async_trait]
pub trait ProviderTransport: Send + Sync {
    /// `GET /voice-actors`, in provider order.
    async fn fetch_actors(&self) -> Result<Vec<VoiceActor>>;

    /// `POST /voice-actors/{id}/generate-voice`.
    ///
    /// A response that decodes but lacks asset URLs is returned as-is; the
    /// caller decides whether it is well-formed.
    async fn generate_voice(&self, request: &GenerationRequest) -> Result<GenerationResult>;

    /// `GET /balances`, the `remainingBalance` field.
    async fn fetch_balance(&self) -> Result<f64>;
}
