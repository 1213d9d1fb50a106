use crate::config::SolscanConfig;
use crate::error::{Error, Result};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Default, Deserialize)]
struct TokenMetaResponse {
    #[serde(default)]
    data: Option<TokenMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenMeta {
    #[serde(default)]
    lp_locked: Option<bool>,
}

/// Looks up whether a token's liquidity pool is locked via Solscan.
///
/// Not part of the alert cycle; callers use it on demand.
pub struct LiquidityLockChecker {
    client: Client,
    token_meta_url: String,
}

impl LiquidityLockChecker {
    pub fn new(config: &SolscanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::LockCheck(e.to_string()))?;

        Ok(Self {
            client,
            token_meta_url: config.token_meta_url.clone(),
        })
    }

    pub async fn is_liquidity_locked(&self, token_address: &str) -> Result<bool> {
        if token_address.trim().is_empty() {
            return Err(Error::LockCheck("token address cannot be empty".to_string()));
        }

        debug!("Checking liquidity lock for {}", token_address);
        let response = self
            .client
            .get(&self.token_meta_url)
            .query(&[("token", token_address)])
            .send()
            .await
            .map_err(|e| Error::LockCheck(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::LockCheck(format!(
                "Solscan returned {} for {}",
                response.status(),
                token_address
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::LockCheck(e.to_string()))?;
        parse_lock_status(&body)
    }
}

/// Reads `data.lpLocked`, treating a missing `data` or flag as unlocked.
pub fn parse_lock_status(body: &str) -> Result<bool> {
    let response: TokenMetaResponse =
        serde_json::from_str(body).map_err(|e| Error::LockCheck(e.to_string()))?;

    Ok(response
        .data
        .and_then(|meta| meta.lp_locked)
        .unwrap_or(false))
}
