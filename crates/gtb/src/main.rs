use std::sync::Arc;

use gtb_core::{
    config::Config,
    ports::{ImageSearch, ModelClient},
};
use gtb_gemini::GeminiClient;
use gtb_unsplash::UnsplashClient;

#[tokio::main]
async fn main() -> Result<(), gtb_core::Error> {
    gtb_core::logging::init("gtb")?;

    let cfg = Arc::new(Config::load()?);

    let model: Arc<dyn ModelClient> = Arc::new(GeminiClient::new(
        cfg.gemini_api_key.clone(),
        cfg.gemini_model.clone(),
        cfg.http_timeout,
    ));
    let images: Arc<dyn ImageSearch> = Arc::new(UnsplashClient::new(
        cfg.unsplash_access_key.clone(),
        cfg.http_timeout,
    ));

    gtb_telegram::router::run_polling(cfg, model, images)
        .await
        .map_err(|e| gtb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
