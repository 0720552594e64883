// Shared test doubles: a scripted Transport that records every call, and a
// Notifier that collects what the dispatcher surfaced.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{json, Value};

use cantoctl::api::transport::{Method, Reply, Transport, TransportError};
use cantoctl::notify::{Level, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Replies are consumed in FIFO order; a request with nothing scripted fails
/// as a network error so tests can't silently succeed on an unexpected call.
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<VecDeque<Result<Reply, TransportError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: Result<Reply, TransportError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(Reply {
            status,
            body: Some(body),
        }));
    }

    pub fn push_empty(&self, status: u16) {
        self.push(Ok(Reply { status, body: None }));
    }

    pub fn push_http_error(&self, status: u16, detail: &str) {
        self.push(Err(TransportError::Http {
            status,
            detail: detail.to_string(),
        }));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Reply, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, Level)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, level: Level) {
        self.messages.push((message.to_string(), level));
    }
}

/// Wire-shaped song JSON, as the backend emits it.
pub fn song_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "titulo": title,
        "youtube_id": format!("yt-{id}"),
        "duracion_seconds": 180,
        "estado": "aprobado",
        "usuario": { "nick": "tester" }
    })
}

pub fn snapshot_json(now_playing: Option<Value>, upcoming: Vec<Value>) -> Value {
    json!({
        "now_playing": now_playing,
        "upcoming": upcoming,
    })
}
