use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    Result,
};

/// Hexagonal port for text generation (Gemini is the first implementation).
///
/// The prompt is passed verbatim — no system prompt, no streaming, no tools.
/// Implementations return the model text trimmed of surrounding whitespace;
/// a trimmed-empty reply is valid and must not be turned into an error.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Hexagonal port for stock-image lookup.
///
/// `Ok(None)` is a miss (bad status, malformed body, missing URL field).
/// Only connection-level failures surface as `Err(Error::Network)`.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Option<String>>;
}

/// Capabilities / limits of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub supports_html: bool,
    pub max_message_len: usize,
    pub max_caption_len: usize,
}

/// Hexagonal port for outbound messaging.
///
/// Telegram is the first implementation; the shape leaves room for future
/// adapters behind capability flags.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;

    /// Send a photo by URL with an HTML caption.
    async fn send_photo(&self, chat_id: ChatId, url: &str, caption_html: &str)
        -> Result<MessageRef>;
}
