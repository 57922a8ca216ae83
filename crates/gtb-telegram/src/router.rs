use std::sync::Arc;

use teloxide::{dispatching::Dispatcher as TgDispatcher, dptree, prelude::*};

use tracing::info;

use gtb_core::{
    config::Config,
    dispatch::Dispatcher,
    ports::{ImageSearch, MessagingPort, ModelClient},
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub dispatcher: Arc<Dispatcher>,
}

/// Long-poll Telegram for updates and hand each text message to the dispatch
/// handler. Updates run as independent tasks, so replies within one chat may
/// arrive out of order; handler tasks are dropped with the dispatcher on
/// shutdown, which releases any in-flight HTTP connections.
pub async fn run_polling(
    cfg: Arc<Config>,
    model: Arc<dyn ModelClient>,
    images: Arc<dyn ImageSearch>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("gtb started: @{}", me.username());
    }
    info!(
        model = %cfg.gemini_model,
        keywords = cfg.photo_keywords.len(),
        "dispatching updates"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let dispatcher = Arc::new(Dispatcher::new(
        model,
        images,
        messenger,
        cfg.photo_keywords.clone(),
        cfg.caption_limit,
    ));

    let state = Arc::new(AppState { cfg, dispatcher });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    TgDispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
