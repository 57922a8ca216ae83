//! Core domain + application logic for the Gemini Telegram photo bot.
//!
//! This crate is intentionally framework-agnostic. Telegram / Gemini / Unsplash
//! live behind ports (traits) implemented in adapter crates.

pub mod caption;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod intent;
pub mod logging;
pub mod ports;

pub use errors::{Error, Result};
