//! Incremental Server-Sent Events tokenizer.
//!
//! Bytes are pushed in as they arrive from the transport and complete
//! messages come out; a message split across chunk boundaries is held back
//! until its terminating blank line shows up. Field parsing and reassembly are
//! done by `eventsource-stream`.

use super::TransportError;
use bytes::Bytes;
use eventsource_stream::{Event, EventStream, Eventsource};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{FutureExt, StreamExt};
use std::convert::Infallible;
use std::time::Duration;

type ChunkReceiver = UnboundedReceiver<Result<Bytes, Infallible>>;

/// The four SSE fields of one message. An empty `id` is reported as `None`;
/// a message without an `event:` line has the SSE default type `"message"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub event_type: Option<String>,
    pub data: String,
    pub id: Option<String>,
    pub reconnection_time: Option<Duration>,
}

impl From<Event> for ParsedEvent {
    fn from(event: Event) -> Self {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        Self {
            event_type: non_empty(event.event),
            data: event.data,
            id: non_empty(event.id),
            reconnection_time: event.retry,
        }
    }
}

pub struct SseTokenizer {
    sender: Option<UnboundedSender<Result<Bytes, Infallible>>>,
    events: EventStream<ChunkReceiver>,
}

impl SseTokenizer {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded();
        Self {
            sender: Some(sender),
            events: receiver.eventsource(),
        }
    }

    /// Push one chunk and return every message it completed, in order.
    pub fn feed(&mut self, chunk: Bytes) -> Result<Vec<ParsedEvent>, TransportError> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| TransportError::Stream("tokenizer already finished".to_string()))?;
        sender
            .unbounded_send(Ok(chunk))
            .map_err(|e| TransportError::Stream(e.to_string()))?;
        self.drain()
    }

    /// Signal end of body and return whatever the tokenizer still held.
    pub fn finish(&mut self) -> Result<Vec<ParsedEvent>, TransportError> {
        self.sender.take();
        self.drain()
    }

    // The receiver never waits on anything but our own sender, so every
    // buffered message is ready without an executor.
    fn drain(&mut self) -> Result<Vec<ParsedEvent>, TransportError> {
        let mut messages = Vec::new();
        while let Some(Some(next)) = self.events.next().now_or_never() {
            let event = next.map_err(|e| TransportError::Stream(e.to_string()))?;
            messages.push(ParsedEvent::from(event));
        }
        Ok(messages)
    }
}

impl Default for SseTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
