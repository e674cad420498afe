use crate::transport::ParsedEvent;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Per-event callback, invoked inline while the response is being read.
pub type EventCallback<'a> = &'a mut (dyn FnMut(&Value, &ParsedEvent, &RawChunk) + Send);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl From<RequestMethod> for Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
        }
    }
}

/// The transport chunk an event was completed by.
#[derive(Debug, Clone)]
pub struct RawChunk {
    pub chunk: Bytes,
    /// Total body bytes received so far, this chunk included.
    pub bytes: usize,
    pub status: StatusCode,
    pub url: String,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone)]
pub struct StreamEvent {
    pub event: Value,
    pub parsed: ParsedEvent,
    pub raw: RawChunk,
}

/// What a call produced: one decoded body, or the decoded payload of every
/// streamed event in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Body(Value),
    Events(Vec<Value>),
}

impl Response {
    pub fn body(&self) -> Option<&Value> {
        match self {
            Response::Body(body) => Some(body),
            Response::Events(_) => None,
        }
    }

    pub fn events(&self) -> Option<&[Value]> {
        match self {
            Response::Body(_) => None,
            Response::Events(events) => Some(events),
        }
    }

    /// Collapse into a single value; streamed events become an array.
    pub fn into_value(self) -> Value {
        match self {
            Response::Body(body) => body,
            Response::Events(events) => Value::Array(events),
        }
    }
}
