use std::sync::Arc;

use teloxide::prelude::*;

use gtb_core::domain::{ChatId, IncomingMessage, UserId};

use crate::router::AppState;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };

    if text.trim().is_empty() {
        return Ok(());
    }

    let username = user
        .username
        .clone()
        .unwrap_or_else(|| user.full_name());

    let incoming = IncomingMessage {
        chat_id: ChatId(msg.chat.id.0),
        user_id: UserId(user.id.0 as i64),
        username,
        text,
    };

    // The dispatch handler owns all failure handling; nothing surfaces here.
    state.dispatcher.handle(incoming).await;

    Ok(())
}
