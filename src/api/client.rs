use crate::api::models::{EventCallback, RequestMethod, Response};
use crate::api::response::decode;
use crate::api::streaming::process_streaming_response;
use crate::config::{ClientConfig, Config};
use crate::error::{MistralError, Result};
use crate::transport::{HttpRequest, ReqwestTransport, Transport, TransportError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";
pub const EMBEDDINGS_PATH: &str = "v1/embeddings";
pub const MODELS_PATH: &str = "v1/models";

/// Client for the Mistral AI HTTP API.
///
/// Cheap to share: the configuration is read-only and every call owns its own
/// request and event list.
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let config = ClientConfig::new(config)?;
        let transport = ReqwestTransport::new(&config.request_options)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Build a client that sends every request through `transport`.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            config: ClientConfig::new(config)?,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST `v1/chat/completions`.
    ///
    /// Streams only when `payload["stream"]` is `true`; otherwise
    /// `server_sent_events` is ignored and the call is buffered.
    pub async fn chat_completions(
        &self,
        payload: &Value,
        server_sent_events: Option<bool>,
        callback: Option<EventCallback<'_>>,
    ) -> Result<Response> {
        let server_sent_events = if payload.get("stream").and_then(|s| s.as_bool()) == Some(true)
        {
            server_sent_events
        } else {
            Some(false)
        };

        self.request(
            CHAT_COMPLETIONS_PATH,
            Some(payload),
            server_sent_events,
            RequestMethod::Post,
            callback,
        )
        .await
    }

    /// POST `v1/embeddings`. Never streams.
    pub async fn embeddings(
        &self,
        payload: &Value,
        callback: Option<EventCallback<'_>>,
    ) -> Result<Response> {
        self.request(
            EMBEDDINGS_PATH,
            Some(payload),
            Some(false),
            RequestMethod::Post,
            callback,
        )
        .await
    }

    /// GET `v1/models`. Never streams.
    pub async fn models(&self, callback: Option<EventCallback<'_>>) -> Result<Response> {
        self.request(MODELS_PATH, None, Some(false), RequestMethod::Get, callback)
            .await
    }

    /// Send one request to `path` (relative to the configured address).
    ///
    /// `server_sent_events` overrides the client default when set. A callback
    /// is only accepted when the call ends up streaming; otherwise this fails
    /// with [`MistralError::Configuration`] before anything is sent.
    pub async fn request(
        &self,
        path: &str,
        payload: Option<&Value>,
        server_sent_events: Option<bool>,
        method: RequestMethod,
        callback: Option<EventCallback<'_>>,
    ) -> Result<Response> {
        let streaming = server_sent_events.unwrap_or(self.config.server_sent_events);

        if callback.is_some() && !streaming {
            return Err(MistralError::Configuration(
                "You are trying to use a callback without Server Sent Events (SSE) enabled."
                    .to_string(),
            ));
        }

        let request = self.build_request(path, payload, method)?;
        debug!(method = %request.method, url = %request.url, streaming, "Sending request");

        let outcome = if streaming {
            self.stream(request, callback).await.map(Response::Events)
        } else {
            self.fetch(request).await.map(Response::Body)
        };

        outcome.map_err(|source| {
            debug!(error = %source, "Request failed");
            MistralError::request(source, payload.cloned())
        })
    }

    fn build_request(
        &self,
        path: &str,
        payload: Option<&Value>,
        method: RequestMethod,
    ) -> Result<HttpRequest> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                MistralError::Configuration(format!("Invalid authorization header: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let body = payload.map(serde_json::to_vec).transpose()?;

        Ok(HttpRequest {
            method: method.into(),
            url: format!("{}{}", self.config.address, path),
            headers,
            body,
            options: self.config.request_options.clone(),
        })
    }

    async fn fetch(&self, request: HttpRequest) -> std::result::Result<Value, TransportError> {
        let response = self.transport.send(request).await?;
        let status = response.status;
        let url = response.url.clone();
        let body = response.bytes().await?;
        let body = String::from_utf8_lossy(&body);

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                url,
                body: body.into_owned(),
            });
        }

        Ok(decode(&body))
    }

    async fn stream(
        &self,
        request: HttpRequest,
        callback: Option<EventCallback<'_>>,
    ) -> std::result::Result<Vec<Value>, TransportError> {
        let response = self.transport.send(request).await?;
        let events = process_streaming_response(response, callback).await?;
        Ok(events.into_iter().map(|e| e.event).collect())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("address", &self.config.address)
            .field("server_sent_events", &self.config.server_sent_events)
            .finish_non_exhaustive()
    }
}
