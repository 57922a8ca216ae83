//! Unsplash adapter (random landscape photo lookup).
//!
//! Misses are not errors: any non-200 status, malformed body or missing URL
//! field comes back as `Ok(None)`. Only connection-level failures escape as
//! `Error::Network` so the handler can tell the user the network is down.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use gtb_core::{errors::Error, ports::ImageSearch, Result};

const RANDOM_PHOTO_URL: &str = "https://api.unsplash.com/photos/random";

#[derive(Clone, Debug)]
pub struct UnsplashClient {
    access_key: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: Option<PhotoUrls>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            access_key: access_key.into(),
            http,
        }
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    async fn search(&self, query: &str) -> Result<Option<String>> {
        let resp = self
            .http
            .get(RANDOM_PHOTO_URL)
            .query(&[
                ("query", query),
                ("orientation", "landscape"),
                ("client_id", self.access_key.as_str()),
            ])
            .send()
            .await;

        let resp = match resp {
            Ok(r) => r,
            Err(e) if e.is_connect() => return Err(Error::Network(e.to_string())),
            Err(e) => {
                debug!("unsplash request error treated as miss: {e}");
                return Ok(None);
            }
        };

        if !resp.status().is_success() {
            debug!(status = %resp.status(), "unsplash non-success status treated as miss");
            return Ok(None);
        }

        let photo: RandomPhoto = match resp.json().await {
            Ok(p) => p,
            Err(e) => {
                debug!("unsplash body parse error treated as miss: {e}");
                return Ok(None);
            }
        };

        Ok(photo.urls.and_then(|u| u.regular))
    }
}
