use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// The shipping photo-trigger keyword set, lowercased.
///
/// Longer triggers first so position ties resolve to the longest match.
pub const DEFAULT_PHOTO_KEYWORDS: [&str; 5] = [
    "покажи фото",
    "покажи картинку",
    "покажи арт",
    "покажи",
    "изображение",
];

/// Caption limit in characters. Telegram caps captions at 1024; 900 leaves
/// headroom.
pub const DEFAULT_CAPTION_LIMIT: usize = 900;

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    // Secrets (all required)
    pub telegram_bot_token: String,
    pub gemini_api_key: String,
    pub unsplash_access_key: String,

    // Model
    pub gemini_model: String,

    // Photo-request policy
    pub photo_keywords: Vec<String>,
    pub caption_limit: usize,

    // HTTP
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = require_env("TELEGRAM_BOT_TOKEN")?;
        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        let unsplash_access_key = require_env("UNSPLASH_ACCESS_KEY")?;

        let gemini_model = env_str("GEMINI_MODEL")
            .and_then(non_empty)
            .unwrap_or_else(|| "gemini-2.0-flash".to_string());

        let photo_keywords = match parse_csv_lower(env_str("PHOTO_KEYWORDS")) {
            kws if kws.is_empty() => DEFAULT_PHOTO_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            kws => kws,
        };

        let caption_limit = env_usize("CAPTION_LIMIT").unwrap_or(DEFAULT_CAPTION_LIMIT);
        let http_timeout = Duration::from_millis(env_u64("HTTP_TIMEOUT_MS").unwrap_or(30_000));

        Ok(Self {
            telegram_bot_token,
            gemini_api_key,
            unsplash_access_key,
            gemini_model,
            photo_keywords,
            caption_limit,
            http_timeout,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    match env_str(key).and_then(non_empty) {
        Some(v) => Ok(v),
        None => Err(Error::Config(format!(
            "{key} environment variable is required"
        ))),
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn parse_csv_lower(v: Option<String>) -> Vec<String> {
    v.unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
