//! The HTTP seam the client talks through.
//!
//! [`Transport`] is the only thing that performs network I/O. The default
//! implementation is [`ReqwestTransport`]; tests inject their own.

pub mod http;
pub mod sse;

use crate::config::RequestOptions;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::TryStreamExt;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::fmt;

pub use http::ReqwestTransport;
pub use sse::{ParsedEvent, SseTokenizer};

pub type BodyStream = BoxStream<'static, Result<Bytes, TransportError>>;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub options: RequestOptions,
}

pub struct HttpResponse {
    pub status: StatusCode,
    pub url: String,
    pub headers: HeaderMap,
    pub body: BodyStream,
}

impl HttpResponse {
    /// Read the remaining body into memory.
    pub async fn bytes(self) -> Result<Bytes, TransportError> {
        let collected = self
            .body
            .try_fold(Vec::new(), |mut acc, chunk| async move {
                acc.extend_from_slice(&chunk);
                Ok(acc)
            })
            .await?;
        Ok(Bytes::from(collected))
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and return as soon as the response head is known.
    /// A non-2xx status is not an error at this level; the body is left
    /// unread for the caller.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug)]
pub enum TransportError {
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },
    Network(reqwest::Error),
    Timeout(String),
    Stream(String),
}

impl TransportError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Response body that came with a failed status, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            TransportError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Status { status, .. } => {
                write!(f, "the server responded with status {}", status.as_u16())
            }
            TransportError::Network(e) => write!(f, "{}", e),
            TransportError::Timeout(msg) => write!(f, "{}", msg),
            TransportError::Stream(msg) => write!(f, "malformed event stream: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Network(err)
        }
    }
}
