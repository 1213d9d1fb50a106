use crate::error::Result;
use crate::models::CoinRecord;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// Outbound side of the bot: delivers one plain-text message to one chat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;
}

pub struct Notifier<S: MessageSender> {
    sender: Arc<S>,
    chat_id: i64,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: Arc<S>, chat_id: i64) -> Self {
        Self { sender, chat_id }
    }

    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }

    /// Sends one alert per coin, in order. Stops at the first failed send.
    pub async fn notify_all(&self, coins: &[CoinRecord]) -> Result<usize> {
        let mut sent = 0;
        for coin in coins {
            let message = format_alert(coin);
            self.sender.send_text(self.chat_id, &message).await?;
            debug!("Alert sent for {} ({})", coin.name, coin.symbol);
            sent += 1;
        }
        Ok(sent)
    }
}

pub fn format_alert(coin: &CoinRecord) -> String {
    format!(
        "🔔 {} ({})\n\
        Price: ${}\n\
        24h Volume: ${}\n\
        Liquidity: ${}\n\
        Twitter: {}\n\
        Telegram: {}\n\
        Website: {}",
        coin.name,
        coin.symbol,
        coin.price,
        format_usd_whole(coin.volume_24h),
        format_usd_whole(coin.liquidity),
        coin.twitter.as_deref().unwrap_or_default(),
        coin.telegram.as_deref().unwrap_or_default(),
        coin.website.as_deref().unwrap_or_default()
    )
}

/// Rounds to a whole number and groups digits in threes: `1234567.8` → `1,234,568`.
pub fn format_usd_whole(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
