use async_trait::async_trait;
use meme_alert_bot::api::dexscreener::parse_pairs;
use meme_alert_bot::api::PairSource;
use meme_alert_bot::error::Result;
use meme_alert_bot::models::CoinRecord;
use meme_alert_bot::notifier::MessageSender;
use std::sync::Mutex;

/// Serves a canned DexScreener body through the real parser.
pub struct CannedSource {
    body: String,
}

impl CannedSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl PairSource for CannedSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>> {
        parse_pairs(&self.body)
    }
}

#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingSender {
    pub fn messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

pub fn pair_json(name: &str, symbol: &str, volume: f64, liquidity: f64, fdv: f64) -> String {
    format!(
        r#"{{
            "chainId": "solana",
            "dexId": "raydium",
            "baseToken": {{ "address": "addr-{symbol}", "name": "{name}", "symbol": "{symbol}" }},
            "priceUsd": "0.004521",
            "volume": {{ "h24": {volume} }},
            "liquidity": {{ "usd": {liquidity} }},
            "fdv": {fdv},
            "info": {{
                "socials": {{ "twitter": "https://x.com/{symbol}", "telegram": "https://t.me/{symbol}" }},
                "website": "https://{symbol}.fun"
            }}
        }}"#
    )
}

pub fn pairs_body(pairs: &[String]) -> String {
    format!(r#"{{"schemaVersion":"1.0.0","pairs":[{}]}}"#, pairs.join(","))
}
