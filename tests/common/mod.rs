#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream, StreamExt};
use mistral_ai::{HttpRequest, HttpResponse, Transport, TransportError};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

/// In-memory transport that records every request and replays a canned
/// response. An `Err` chunk is delivered as a read timeout.
pub struct MockTransport {
    status: StatusCode,
    chunks: Vec<Result<Bytes, String>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(status: u16, chunks: &[&str]) -> Arc<Self> {
        Self::with_items(status, chunks.iter().map(|c| Ok(*c)).collect())
    }

    pub fn with_items(status: u16, items: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::from_u16(status).unwrap(),
            chunks: items
                .into_iter()
                .map(|item| {
                    item.map(|c| Bytes::from(c.to_string()))
                        .map_err(|e| e.to_string())
                })
                .collect(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let chunks: Vec<Result<Bytes, TransportError>> = self
            .chunks
            .iter()
            .cloned()
            .map(|chunk| chunk.map_err(TransportError::Timeout))
            .collect();

        Ok(HttpResponse {
            status: self.status,
            url: request.url,
            headers: HeaderMap::new(),
            body: stream::iter(chunks).boxed(),
        })
    }
}

/// Transport that fails before any response arrives.
pub struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Timeout(
            "Connection timeout - no data received for 1 seconds".to_string(),
        ))
    }
}
