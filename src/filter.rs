use crate::models::CoinRecord;
use serde::{Deserialize, Serialize};

pub const MIN_VOLUME_24H: f64 = 1_000_000.0;
pub const MIN_LIQUIDITY: f64 = 100_000.0;
pub const MAX_FDV: f64 = 100_000_000.0;

/// Numeric cut-offs for an alert. All comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterThresholds {
    pub min_volume_24h: f64,
    pub min_liquidity: f64,
    pub max_fdv: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_volume_24h: MIN_VOLUME_24H,
            min_liquidity: MIN_LIQUIDITY,
            max_fdv: MAX_FDV,
        }
    }
}

impl FilterThresholds {
    pub fn passes(&self, coin: &CoinRecord) -> bool {
        coin.volume_24h > self.min_volume_24h
            && coin.liquidity > self.min_liquidity
            && coin.fdv < self.max_fdv
            && coin.has_twitter()
            && coin.has_telegram()
            && coin.has_website()
    }
}

/// Keeps the coins that pass every threshold, in input order.
pub fn filter_coins(coins: &[CoinRecord], thresholds: &FilterThresholds) -> Vec<CoinRecord> {
    coins
        .iter()
        .filter(|coin| thresholds.passes(coin))
        .cloned()
        .collect()
}
