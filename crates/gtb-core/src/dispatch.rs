//! Per-message orchestration.
//!
//! One handler task per inbound message: generate a reply, classify the
//! photo intent, optionally look up a stock image, deliver one or two
//! outbound messages. Every failure is caught at the outer boundary and
//! turned into a user-visible reply; nothing propagates to the transport.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::{
    caption::shape_caption,
    domain::{ChatId, IncomingMessage, OutboundPlan, PhotoIntent},
    errors::Error,
    formatting::strip_tags,
    intent::classify,
    ports::{ImageSearch, MessagingPort, ModelClient},
    Result,
};

const IMAGE_MISS_REPLY: &str = "could not find a matching image";
const NETWORK_DOWN_REPLY: &str = "cannot connect to the internet";

/// Process-wide dispatcher. Immutable after construction and shared across
/// handler tasks; the adapters it holds are `Send + Sync`, so no locks.
pub struct Dispatcher {
    model: Arc<dyn ModelClient>,
    images: Arc<dyn ImageSearch>,
    messenger: Arc<dyn MessagingPort>,
    photo_keywords: Vec<String>,
    caption_limit: usize,
}

impl Dispatcher {
    pub fn new(
        model: Arc<dyn ModelClient>,
        images: Arc<dyn ImageSearch>,
        messenger: Arc<dyn MessagingPort>,
        photo_keywords: Vec<String>,
        caption_limit: usize,
    ) -> Self {
        Self {
            model,
            images,
            messenger,
            photo_keywords,
            caption_limit,
        }
    }

    /// Handle one inbound message to completion. Never fails: errors become
    /// replies, and a failed error reply is only logged.
    pub async fn handle(&self, msg: IncomingMessage) {
        debug!(
            chat_id = msg.chat_id.0,
            user = %msg.username,
            "handling message"
        );

        if let Err(err) = self.dispatch(&msg).await {
            error!(chat_id = msg.chat_id.0, "handler failed: {err}");
            let reply = user_reply(&err);
            if let Err(send_err) = self.messenger.send_html(msg.chat_id, &reply).await {
                warn!(chat_id = msg.chat_id.0, "error reply not delivered: {send_err}");
            }
        }
    }

    async fn dispatch(&self, msg: &IncomingMessage) -> Result<()> {
        let generated = self.model.generate(msg.text.trim()).await?;
        let plan = self.plan(&msg.text, generated).await?;
        self.deliver(msg.chat_id, plan).await
    }

    async fn plan(&self, text: &str, generated: String) -> Result<OutboundPlan> {
        let PhotoIntent::Photo { query } = classify(text, &self.photo_keywords) else {
            return Ok(OutboundPlan::TextOnly(generated));
        };

        let Some(url) = self.images.search(&query).await? else {
            return Ok(OutboundPlan::TextOnly(IMAGE_MISS_REPLY.to_string()));
        };

        let (caption, full) = shape_caption(&generated, self.caption_limit);
        Ok(match full {
            None => OutboundPlan::PhotoWithCaption { url, caption },
            Some(full_text) => OutboundPlan::PhotoWithCaptionThenText {
                url,
                caption,
                full_text,
            },
        })
    }

    async fn deliver(&self, chat_id: ChatId, plan: OutboundPlan) -> Result<()> {
        match plan {
            OutboundPlan::TextOnly(text) => {
                self.messenger.send_html(chat_id, &text).await?;
            }
            OutboundPlan::PhotoWithCaption { url, caption } => {
                self.messenger.send_photo(chat_id, &url, &caption).await?;
            }
            OutboundPlan::PhotoWithCaptionThenText {
                url,
                caption,
                full_text,
            } => {
                // Photo first; if it fails the full text must not go out.
                self.messenger.send_photo(chat_id, &url, &caption).await?;
                self.messenger.send_html(chat_id, &full_text).await?;
            }
        }
        Ok(())
    }
}

fn user_reply(err: &Error) -> String {
    match err {
        Error::Network(_) => NETWORK_DOWN_REPLY.to_string(),
        other => format!("error: {}", strip_tags(&other.description())),
    }
}
