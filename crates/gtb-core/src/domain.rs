/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a delivered message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// An inbound text message as handed over by the transport.
///
/// Owned exclusively by the handler task processing it; discarded after the
/// handler returns. `username` falls back to the user's display name when no
/// Telegram username is set.
#[derive(Clone, Debug)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub username: String,
    pub text: String,
}

/// Outcome of photo-intent classification.
///
/// `query` is the original-casing message text with the matched trigger
/// removed and surrounding whitespace trimmed. It may be empty: a bare
/// trigger still counts as a photo request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoIntent {
    Chat,
    Photo { query: String },
}

/// What the handler decided to send back for one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutboundPlan {
    TextOnly(String),
    PhotoWithCaption {
        url: String,
        caption: String,
    },
    /// Caption is a truncated prefix of `full_text`; the photo goes out
    /// first, then the untruncated text as a second message.
    PhotoWithCaptionThenText {
        url: String,
        caption: String,
        full_text: String,
    },
}
