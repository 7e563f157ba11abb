// Live lobby event subscription over a server-sent-event stream.
//
// The backend separates frames with a blank line and emits `event:` /
// `data:` fields, plus `event: ping` keepalives every few seconds. Frame
// payloads are opaque to this layer.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};

/// One decoded server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEvent {
    /// Event type from the `event:` field; `"message"` when absent.
    pub kind: String,
    /// Raw payload from the `data:` field(s), multi-line joined by `\n`.
    pub data: String,
}

impl StreamEvent {
    /// Returns true for the backend's keepalive frames.
    pub fn is_ping(&self) -> bool {
        self.kind == "ping"
    }

    /// Decodes the payload as JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.data).ok()
    }
}

type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, reqwest::Error>> + Send>>;

/// Handle to one lobby's live event stream. The caller owns its lifecycle;
/// dropping the handle closes the underlying connection.
pub struct EventStream {
    body: ByteStream,
    frames: FrameBuffer,
    done: bool,
}

impl EventStream {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()));
        Self {
            body: Box::pin(body),
            frames: FrameBuffer::default(),
            done: false,
        }
    }

    /// Waits for the next event. Returns `None` once the stream has ended;
    /// transport errors end the stream after a warning.
    pub async fn next(&mut self) -> Option<StreamEvent> {
        loop {
            if let Some(event) = self.frames.next_event() {
                return Some(event);
            }
            if self.done {
                return None;
            }
            match self.body.next().await {
                Some(Ok(chunk)) => self.frames.push(&String::from_utf8_lossy(&chunk)),
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "event stream transport error");
                    self.done = true;
                }
                None => self.done = true,
            }
        }
    }
}

// Accumulates raw text and yields complete frames. Tolerates CRLF line
// endings and frames split across arbitrary chunk boundaries.
#[derive(Debug, Default)]
struct FrameBuffer {
    buffer: String,
}

impl FrameBuffer {
    fn push(&mut self, chunk: &str) {
        self.buffer.push_str(&chunk.replace("\r\n", "\n"));
    }

    fn next_event(&mut self) -> Option<StreamEvent> {
        while let Some(end) = self.buffer.find("\n\n") {
            let frame: String = self.buffer.drain(..end + 2).collect();
            if let Some(event) = parse_frame(frame.trim_end_matches('\n')) {
                return Some(event);
            }
        }
        None
    }
}

// Decodes one frame; comment-only frames yield nothing.
fn parse_frame(frame: &str) -> Option<StreamEvent> {
    let mut kind: Option<&str> = None;
    let mut data_lines: Vec<&str> = Vec::new();
    for line in frame.lines() {
        if line.starts_with(':') {
            continue;
        }
        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "event" => kind = Some(value),
            "data" => data_lines.push(value),
            // id/retry and unknown fields are not used by the backend.
            _ => {}
        }
    }
    if kind.is_none() && data_lines.is_empty() {
        return None;
    }
    Some(StreamEvent {
        kind: kind.unwrap_or("message").to_string(),
        data: data_lines.join("\n"),
    })
}
