use crate::transport::TransportError;
use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum MistralError {
    /// No API key while talking to the public endpoint.
    MissingCredential(String),
    /// A callback was supplied to a call that does not stream.
    Configuration(String),
    /// The service rejected the request or the exchange failed in transit.
    Request {
        message: String,
        source: TransportError,
        payload: Option<Value>,
    },
    Network(reqwest::Error),
    Json(serde_json::Error),
}

impl MistralError {
    pub(crate) fn request(source: TransportError, payload: Option<Value>) -> Self {
        MistralError::Request {
            message: source.to_string(),
            source,
            payload,
        }
    }

    /// The payload that was being sent when a `Request` error occurred.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            MistralError::Request { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            MistralError::Request { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for MistralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MistralError::MissingCredential(msg) => write!(f, "{}", msg),
            MistralError::Configuration(msg) => write!(f, "{}", msg),
            MistralError::Request { message, .. } => write!(f, "Request error: {}", message),
            MistralError::Network(e) => write!(f, "Network error: {}", e),
            MistralError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for MistralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MistralError::Request { source, .. } => Some(source),
            MistralError::Network(e) => Some(e),
            MistralError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MistralError {
    fn from(err: reqwest::Error) -> Self {
        MistralError::Network(err)
    }
}

impl From<serde_json::Error> for MistralError {
    fn from(err: serde_json::Error) -> Self {
        MistralError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, MistralError>;
