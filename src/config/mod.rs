use crate::error::{Error, Result};
use crate::filter::FilterThresholds;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

const DEXSCREENER_PAIRS_URL: &str = "https://api.dexscreener.com/latest/dex/tokens/volume/solana";
const SOLSCAN_TOKEN_META_URL: &str = "https://api.solscan.io/token/meta";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub dexscreener: DexScreenerConfig,
    pub solscan: SolscanConfig,
    pub filter: FilterThresholds,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Accepts `chat_id = -100123` as well as `chat_id = "-100123"`.
    #[serde(deserialize_with = "chat_id_from_toml")]
    pub chat_id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChatIdField {
    Number(i64),
    Text(String),
}

fn chat_id_from_toml<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match ChatIdField::deserialize(deserializer)? {
        ChatIdField::Number(id) => id.to_string(),
        ChatIdField::Text(id) => id,
    })
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DexScreenerConfig {
    pub pairs_url: String,
    pub request_timeout_secs: u64,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            pairs_url: DEXSCREENER_PAIRS_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SolscanConfig {
    pub token_meta_url: String,
}

impl Default for SolscanConfig {
    fn default() -> Self {
        Self {
            token_meta_url: SOLSCAN_TOKEN_META_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ScheduleConfig {
    pub first_run_secs: u64,
    pub interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            first_run_secs: 10,
            interval_secs: 300,
        }
    }
}

impl ScheduleConfig {
    pub fn first_run(&self) -> Duration {
        Duration::from_secs(self.first_run_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl DexScreenerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Defaults, then the optional TOML file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TELEGRAM_TOKEN_VAR) {
            self.telegram.bot_token = token;
        }
        if let Some(chat_id) = lookup(TELEGRAM_CHAT_ID_VAR) {
            self.telegram.chat_id = chat_id;
        }
    }

    /// Checks everything the alert loop needs before the bot starts.
    pub fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(Error::ConfigError(format!(
                "{} is not set",
                TELEGRAM_TOKEN_VAR
            )));
        }
        self.chat_id()?;
        if self.schedule.interval_secs == 0 {
            return Err(Error::ConfigError("schedule.interval_secs must be positive".to_string()));
        }
        if self.dexscreener.pairs_url.trim().is_empty() {
            return Err(Error::ConfigError("dexscreener.pairs_url cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn chat_id(&self) -> Result<i64> {
        self.telegram.chat_id.trim().parse::<i64>().map_err(|_| {
            Error::ConfigError(format!(
                "invalid chat id {:?}, set {} to a numeric Telegram chat id",
                self.telegram.chat_id, TELEGRAM_CHAT_ID_VAR
            ))
        })
    }
}
