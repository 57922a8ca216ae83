/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type so the bot
/// core can handle failures consistently (fixed network reply vs generic
/// user-facing message).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// Connection-level failure. The dispatch handler turns this into the
    /// fixed "cannot connect to the internet" reply instead of echoing the
    /// description.
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(String),
}

impl Error {
    /// The underlying description without the variant prefix.
    ///
    /// User-visible error replies carry only this (tag-stripped); the full
    /// Display form goes to the log.
    pub fn description(&self) -> String {
        match self {
            Error::Config(s) | Error::Network(s) | Error::Model(s) | Error::External(s) => {
                s.clone()
            }
            Error::Io(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
