use serde::{Deserialize, Serialize};

/// One trading pair snapshot, flattened from a DexScreener pair object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub name: String,
    pub symbol: String,
    /// USD price exactly as the API reported it.
    pub price: String,
    pub volume_24h: f64,
    pub liquidity: f64,
    pub fdv: f64,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub website: Option<String>,
}

impl CoinRecord {
    pub fn has_twitter(&self) -> bool {
        is_present(&self.twitter)
    }

    pub fn has_telegram(&self) -> bool {
        is_present(&self.telegram)
    }

    pub fn has_website(&self) -> bool {
        is_present(&self.website)
    }
}

/// Missing, `null` and blank (empty or whitespace-only) strings all count as absent.
fn is_present(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(twitter: Option<&str>) -> CoinRecord {
        CoinRecord {
            name: "Bonk".to_string(),
            symbol: "BONK".to_string(),
            price: "0.00002".to_string(),
            volume_24h: 0.0,
            liquidity: 0.0,
            fdv: 0.0,
            twitter: twitter.map(str::to_string),
            telegram: None,
            website: None,
        }
    }

    #[test]
    fn test_presence_treats_missing_and_blank_alike() {
        assert!(!record(None).has_twitter());
        assert!(!record(Some("")).has_twitter());
        assert!(!record(Some("   ")).has_twitter());
        assert!(record(Some("https://x.com/bonk_inu")).has_twitter());
    }
}
