use crate::api::models::{EventCallback, RawChunk, StreamEvent};
use crate::api::response::{decode, finish_reason, is_done};
use crate::transport::{HttpResponse, ParsedEvent, SseTokenizer, TransportError};
use futures::StreamExt;
use tracing::{debug, trace};

/// Read a streamed response to the end, turning every SSE message into a
/// [`StreamEvent`].
///
/// Each event is handed to `callback` as soon as the chunk completing it has
/// been tokenized, then kept. `[DONE]` messages are dropped. A failed status
/// aborts on the first chunk (or at end of body when there is none) and the
/// events gathered so far are discarded.
pub async fn process_streaming_response(
    response: HttpResponse,
    mut callback: Option<EventCallback<'_>>,
) -> Result<Vec<StreamEvent>, TransportError> {
    let HttpResponse {
        status,
        url,
        headers,
        mut body,
    } = response;

    let mut tokenizer = SseTokenizer::new();
    let mut events = Vec::new();
    let mut received = 0usize;
    let mut last_raw: Option<RawChunk> = None;

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        received += chunk.len();

        if !status.is_success() {
            debug!(status = status.as_u16(), url = %url, "Stream aborted");
            return Err(TransportError::Status {
                status,
                url,
                body: String::from_utf8_lossy(&chunk).into_owned(),
            });
        }

        trace!(bytes = chunk.len(), total = received, "Chunk received");

        let raw = RawChunk {
            chunk: chunk.clone(),
            bytes: received,
            status,
            url: url.clone(),
            headers: headers.clone(),
        };

        for parsed in tokenizer.feed(chunk)? {
            accept(parsed, &raw, &mut callback, &mut events);
        }
        last_raw = Some(raw);
    }

    if !status.is_success() {
        return Err(TransportError::Status {
            status,
            url,
            body: String::new(),
        });
    }

    let remaining = tokenizer.finish()?;
    if let Some(raw) = &last_raw {
        for parsed in remaining {
            accept(parsed, raw, &mut callback, &mut events);
        }
    }

    debug!(events = events.len(), bytes = received, "Stream completed");
    Ok(events)
}

fn accept(
    parsed: ParsedEvent,
    raw: &RawChunk,
    callback: &mut Option<EventCallback<'_>>,
    events: &mut Vec<StreamEvent>,
) {
    let event = decode(&parsed.data);
    if is_done(&event) {
        trace!("Completion marker received");
        return;
    }

    let event = StreamEvent {
        event,
        parsed,
        raw: raw.clone(),
    };

    if let Some(callback) = callback.as_deref_mut() {
        callback(&event.event, &event.parsed, &event.raw);
    }

    if let Some(reason) = finish_reason(&event.event) {
        debug!(reason, "Choice finished");
    }

    events.push(event);
}
