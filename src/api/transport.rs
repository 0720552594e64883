// The backend seam: one authenticated request function returning parsed JSON.
// The view model only sees this trait, so tests can script replies without a
// server.

use serde_json::Value;

/// HTTP methods the admin endpoints actually use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A successful (2xx) backend reply. `body` is `None` for responses without
/// content, notably the 204 the advance endpoint returns on an empty queue.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Non-2xx response. `detail` carries the server's `detail` text when the
    /// body had one, otherwise a generic message.
    #[error("{detail}")]
    Http { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An authenticated JSON request against the versioned API root. Paths are
/// relative (`/canciones/cola`); the implementation supplies the base URL and
/// the admin credential header.
pub trait Transport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> impl std::future::Future<Output = Result<Reply, TransportError>> + Send;
}
