// src/api/client.rs
//
// reqwest-backed Transport. Adds the admin API-key header to every request
// and maps non-2xx responses to TransportError::Http, pulling the server's
// `detail` text out of the body when there is one.

use serde_json::Value;

use crate::api::transport::{Method, Reply, Transport, TransportError};
use crate::config::Config;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            api_key: config.api.api_key.clone(),
        }
    }
}

impl Transport for ApiClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Reply, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        }
        .header("X-API-Key", &self.api_key);

        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(?method, %url, "api request");
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if (200..300).contains(&status) {
            let body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice(&bytes)?)
            };
            return Ok(Reply { status, body });
        }

        // Non-2xx: surface the server's detail message when the body has one.
        let detail = serde_json::from_slice::<Value>(&bytes)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
            .unwrap_or_else(|| format!("request failed with status {status}"));

        tracing::debug!(status, %detail, "api error reply");
        Err(TransportError::Http { status, detail })
    }
}
