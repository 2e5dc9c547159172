use super::wire::{BalancesEnvelope, GenerateVoiceBody, GeneratedVoiceEnvelope, VoiceActorsEnvelope};
use super::ProviderTransport;
use crate::config::StudioConfig;
use crate::types::{GenerationRequest, GenerationResult, VoiceActor};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Proxy;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_KEY_HEADER: &str = "x-api-key";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// `reqwest`-backed provider transport.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new().with_field_path("base_url"),
            )
        })?;

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            Error::configuration_with_context(
                "API key contains characters not allowed in a header",
                ErrorContext::new().with_field_path("api_key"),
            )
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy: {}", e),
                    ErrorContext::new().with_field_path("proxy_url"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Read the body, map non-2xx to [`Error::Remote`], then decode.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Remote {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ProviderTransport for HttpTransport {
    async fn fetch_actors(&self) -> Result<Vec<VoiceActor>> {
        let url = self.endpoint(&["voice-actors"])?;
        debug!(%url, "GET voice actors");
        let response = self.client.get(url).send().await?;
        let envelope: VoiceActorsEnvelope = read_json(response).await?;
        Ok(envelope.voice_actors)
    }

    async fn generate_voice(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let url = self.endpoint(&["voice-actors", request.actor_id.as_str(), "generate-voice"])?;
        let request_id = uuid::Uuid::new_v4().to_string();
        debug!(%url, %request_id, chars = request.script.chars().count(), "POST generate voice");
        let response = self
            .client
            .post(url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(&GenerateVoiceBody::from(request))
            .send()
            .await?;
        let envelope: GeneratedVoiceEnvelope = read_json(response).await?;
        Ok(envelope.generated_voice)
    }

    async fn fetch_balance(&self) -> Result<f64> {
        let url = self.endpoint(&["balances"])?;
        debug!(%url, "GET balances");
        let response = self.client.get(url).send().await?;
        let envelope: BalancesEnvelope = read_json(response).await?;
        Ok(envelope.balances.remaining_balance)
    }
}
