use crate::api::PairSource;
use crate::config::DexScreenerConfig;
use crate::error::{Error, Result};
use crate::models::CoinRecord;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DexPair {
    base_token: BaseToken,
    price_usd: PriceField,
    volume: Volume,
    liquidity: Liquidity,
    fdv: f64,
    #[serde(default)]
    info: Option<PairInfo>,
}

#[derive(Debug, Deserialize)]
struct BaseToken {
    name: String,
    symbol: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
struct Volume {
    h24: f64,
}

#[derive(Debug, Deserialize)]
struct Liquidity {
    usd: f64,
}

#[derive(Debug, Default, Deserialize)]
struct PairInfo {
    #[serde(default)]
    socials: Option<Socials>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    websites: Option<Vec<WebsiteEntry>>,
}

/// DexScreener has served socials both keyed by platform and as a typed list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Socials {
    Listed(Vec<SocialEntry>),
    Keyed(SocialLinks),
}

#[derive(Debug, Default, Deserialize)]
struct SocialLinks {
    #[serde(default)]
    twitter: Option<String>,
    #[serde(default)]
    telegram: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SocialEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebsiteEntry {
    #[serde(default)]
    url: Option<String>,
}

impl Socials {
    fn link(&self, platform: &str) -> Option<String> {
        match self {
            Socials::Keyed(links) => match platform {
                "twitter" => links.twitter.clone(),
                "telegram" => links.telegram.clone(),
                _ => None,
            },
            Socials::Listed(entries) => entries
                .iter()
                .find(|entry| entry.kind.eq_ignore_ascii_case(platform))
                .and_then(|entry| entry.url.clone()),
        }
    }
}

impl PairInfo {
    fn website(&self) -> Option<String> {
        self.website.clone().or_else(|| {
            self.websites
                .as_ref()
                .and_then(|sites| sites.iter().find_map(|site| site.url.clone()))
        })
    }
}

impl From<DexPair> for CoinRecord {
    fn from(pair: DexPair) -> Self {
        let info = pair.info.unwrap_or_default();
        let (twitter, telegram) = match &info.socials {
            Some(socials) => (socials.link("twitter"), socials.link("telegram")),
            None => (None, None),
        };
        let price = match pair.price_usd {
            PriceField::Text(text) => text,
            PriceField::Number(number) => number.to_string(),
        };

        CoinRecord {
            name: pair.base_token.name,
            symbol: pair.base_token.symbol,
            price,
            volume_24h: pair.volume.h24,
            liquidity: pair.liquidity.usd,
            fdv: pair.fdv,
            twitter,
            telegram,
            website: info.website(),
        }
    }
}

/// Parses a DexScreener pairs payload into records, keeping API order.
///
/// `"pairs": null` is an empty result; a body without a `pairs` key is malformed.
pub fn parse_pairs(body: &str) -> Result<Vec<CoinRecord>> {
    let mut response: Value = serde_json::from_str(body)?;
    let pairs: Vec<Value> = match response.get_mut("pairs").map(Value::take) {
        None => return Err(Error::MalformedResponse("missing field `pairs`".to_string())),
        Some(Value::Null) => Vec::new(),
        Some(pairs) => serde_json::from_value(pairs)
            .map_err(|e| Error::MalformedResponse(format!("pairs: {}", e)))?,
    };

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<DexPair>(value)
                .map(CoinRecord::from)
                .map_err(|e| Error::MalformedResponse(format!("pair {}: {}", index, e)))
        })
        .collect()
}

pub struct DexScreenerClient {
    client: Client,
    pairs_url: String,
}

impl DexScreenerClient {
    pub fn new(config: &DexScreenerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            pairs_url: config.pairs_url.clone(),
        })
    }
}

#[async_trait]
impl PairSource for DexScreenerClient {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>> {
        debug!("Fetching pairs from {}", self.pairs_url);
        let response = self.client.get(&self.pairs_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(format!("DexScreener returned {}", status)));
        }

        let body = response.text().await?;
        let coins = parse_pairs(&body)?;
        info!("Fetched {} pairs from DexScreener", coins.len());
        Ok(coins)
    }
}
