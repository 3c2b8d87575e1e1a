//! Chat client — the single point of entry for all LibreChat backend calls.
//!
//! ARCHITECTURAL RULE: the matching engine never talks to the chat backend;
//! only the chat routes call this module.

pub mod handlers;

use std::sync::{Arc, Mutex};

use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default model requested from the backend when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Chat backend returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    text: &'a str,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<String>,
    stream: bool,
}

/// Reply shape shared by the buffered and streaming paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: String,
    pub message_id: String,
}

/// One server-sent event from the streaming endpoint: either an incremental
/// text chunk or the final reply envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamEvent {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    r#final: bool,
    #[serde(default)]
    conversation_id: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
}

/// Callback invoked with each streamed text chunk.
pub type ChunkCallback<'a> = &'a (dyn Fn(&str) + Send + Sync);

/// The chat client used by the chat routes. Wraps the LibreChat ask API with
/// retry logic and conversation-id tracking.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    conversation: Arc<Mutex<Option<String>>>,
}

impl ChatClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            conversation: Arc::new(Mutex::new(None)),
        }
    }

    /// Sends one message and returns the full reply. Retries on 429 and 5xx
    /// with exponential backoff. With `on_chunk` set, the backend streams
    /// and each text chunk is forwarded as it arrives; retries only happen
    /// before the first chunk is delivered.
    pub async fn send_message(
        &self,
        text: &str,
        model: Option<&str>,
        on_chunk: Option<ChunkCallback<'_>>,
    ) -> Result<ChatReply, ChatError> {
        let model = model.unwrap_or(DEFAULT_MODEL);
        let conversation_id = self.current_conversation();

        let mut last_error: Option<ChatError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Chat call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let request_body = ChatRequest {
                text,
                model,
                conversation_id: conversation_id.clone(),
                stream: on_chunk.is_some(),
            };

            let mut request = self
                .client
                .post(format!("{}/api/ask", self.base_url))
                .header("content-type", "application/json")
                .json(&request_body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ChatError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Chat backend returned {}: {}", status, body);
                last_error = Some(ChatError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ChatError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let reply = match on_chunk {
                Some(callback) => self.drain_stream(response, callback).await?,
                None => response.json::<ChatReply>().await?,
            };

            if reply.response.is_empty() {
                return Err(ChatError::EmptyReply);
            }

            debug!(
                "Chat reply received (conversation: {}, message: {})",
                reply.conversation_id, reply.message_id
            );
            self.remember_conversation(&reply.conversation_id);
            return Ok(reply);
        }

        Err(last_error.unwrap_or(ChatError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Reads the SSE stream to completion, forwarding text chunks and
    /// assembling the final reply.
    async fn drain_stream(
        &self,
        response: reqwest::Response,
        on_chunk: ChunkCallback<'_>,
    ) -> Result<ChatReply, ChatError> {
        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut assembled = String::new();
        let mut conversation_id = None;
        let mut message_id = None;

        let mut handle_line = |line: &str,
                               assembled: &mut String,
                               conversation_id: &mut Option<String>,
                               message_id: &mut Option<String>|
         -> Result<(), ChatError> {
            let Some(event) = parse_sse_line(line)? else {
                return Ok(());
            };
            if let Some(text) = &event.text {
                if !event.r#final {
                    on_chunk(text);
                    assembled.push_str(text);
                } else {
                    // The final envelope carries the complete text.
                    *assembled = text.clone();
                }
            }
            if event.r#final {
                *conversation_id = event.conversation_id;
                *message_id = event.message_id;
            }
            Ok(())
        };

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| ChatError::Stream(e.to_string()))?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            while let Some(newline) = buffer.find('\n') {
                let line = buffer[..newline].to_string();
                buffer.drain(..=newline);
                handle_line(&line, &mut assembled, &mut conversation_id, &mut message_id)?;
            }
        }
        // A final event may arrive without a trailing newline.
        if !buffer.trim().is_empty() {
            handle_line(&buffer, &mut assembled, &mut conversation_id, &mut message_id)?;
        }

        match (conversation_id, message_id) {
            (Some(conversation_id), Some(message_id)) => Ok(ChatReply {
                response: assembled,
                conversation_id,
                message_id,
            }),
            _ => Err(ChatError::Stream(
                "stream ended without a final event".to_string(),
            )),
        }
    }

    /// Probes the backend health endpoint. Never errors — an unreachable
    /// backend is simply "not connected".
    pub async fn test_connection(&self) -> bool {
        let mut request = self.client.get(format!("{}/api/health", self.base_url));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Chat backend unreachable: {e}");
                false
            }
        }
    }

    /// Forgets the tracked conversation; the next message starts a new one.
    pub fn reset_conversation(&self) {
        let mut conversation = self.conversation.lock().unwrap_or_else(|e| e.into_inner());
        *conversation = None;
    }

    pub fn current_conversation(&self) -> Option<String> {
        self.conversation
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn remember_conversation(&self, id: &str) {
        let mut conversation = self.conversation.lock().unwrap_or_else(|e| e.into_inner());
        *conversation = Some(id.to_string());
    }
}

/// Parses one SSE line. Returns `None` for blank lines, comments, and
/// non-data fields; the `[DONE]` sentinel is also skipped (the final event
/// envelope carries the reply metadata).
fn parse_sse_line(line: &str) -> Result<Option<StreamEvent>, ChatError> {
    let line = line.trim();
    let Some(payload) = line.strip_prefix("data:") else {
        return Ok(None);
    };
    let payload = payload.trim();
    if payload.is_empty() || payload == "[DONE]" {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(payload)?))
}
