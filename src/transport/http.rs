use super::{BodyStream, HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::RequestOptions;
use async_trait::async_trait;
use futures::{stream, StreamExt};
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

/// [`Transport`] backed by a `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client honoring the connection-level options. The per-request
    /// ones are applied in [`Transport::send`].
    pub fn new(options: &RequestOptions) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = options.open_timeout {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            options,
        } = request;

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(secs) = options.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let pending = builder.send();
        let response = match options.write_timeout {
            Some(secs) => timeout(Duration::from_secs(secs), pending)
                .await
                .map_err(|_| {
                    warn!(url = %url, secs, "Write timeout");
                    TransportError::Timeout(format!(
                        "Write timeout - no response received {} seconds after sending the request",
                        secs
                    ))
                })??,
            None => pending.await?,
        };

        debug!(status = response.status().as_u16(), url = %response.url(), "Response received");

        let status = response.status();
        let url = response.url().to_string();
        let headers = response.headers().clone();
        let chunks: BodyStream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from))
            .boxed();

        let body = match options.read_timeout {
            Some(secs) => with_read_timeout(chunks, Duration::from_secs(secs)),
            None => chunks,
        };

        Ok(HttpResponse {
            status,
            url,
            headers,
            body,
        })
    }
}

/// Fail the body stream when no chunk arrives within `limit`.
fn with_read_timeout(chunks: BodyStream, limit: Duration) -> BodyStream {
    stream::unfold(Some(chunks), move |state| async move {
        let mut chunks = state?;
        match timeout(limit, chunks.next()).await {
            Ok(Some(chunk)) => Some((chunk, Some(chunks))),
            Ok(None) => None,
            Err(_) => Some((
                Err(TransportError::Timeout(format!(
                    "Connection timeout - no data received for {} seconds",
                    limit.as_secs()
                ))),
                None,
            )),
        }
    })
    .boxed()
}
