use std::io;
use std::result::Result as StdResult;
use teloxide::RequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Upstream returned an error status: {0}")]
    UpstreamStatus(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Telegram error: {0}")]
    Telegram(String),
    #[error("Liquidity lock check failed: {0}")]
    LockCheck(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::Telegram(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
