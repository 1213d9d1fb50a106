use crate::api::PairSource;
use crate::error::Result;
use crate::filter::{filter_coins, FilterThresholds};
use crate::metrics;
use crate::notifier::{MessageSender, Notifier};
use log::{debug, info};
use std::fmt;
use std::sync::Arc;

/// Counts from a single fetch → filter → notify pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub matched: usize,
    pub sent: usize,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fetched {} pairs, {} matched, {} alerts sent",
            self.fetched, self.matched, self.sent
        )
    }
}

pub struct AlertPipeline<P: PairSource, S: MessageSender> {
    source: Arc<P>,
    notifier: Notifier<S>,
    thresholds: FilterThresholds,
}

impl<P: PairSource, S: MessageSender> AlertPipeline<P, S> {
    pub fn new(source: Arc<P>, notifier: Notifier<S>, thresholds: FilterThresholds) -> Self {
        Self {
            source,
            notifier,
            thresholds,
        }
    }

    /// Runs one cycle. Any fetch or send error aborts the rest of the cycle.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        metrics::CYCLES_RUN.inc();

        let coins = self.source.fetch_coins().await?;
        metrics::PAIRS_FETCHED.inc_by(coins.len() as u64);

        let matched = filter_coins(&coins, &self.thresholds);
        for coin in &matched {
            debug!(
                "{} ({}) passed filters: volume={} liquidity={} fdv={}",
                coin.name, coin.symbol, coin.volume_24h, coin.liquidity, coin.fdv
            );
        }

        let sent = self.notifier.notify_all(&matched).await?;
        metrics::ALERTS_SENT.inc_by(sent as u64);

        let report = CycleReport {
            fetched: coins.len(),
            matched: matched.len(),
            sent,
        };
        info!("Alert cycle for chat {}: {}", self.notifier.chat_id(), report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPairSource;
    use crate::error::Error;
    use crate::models::CoinRecord;
    use crate::notifier::MockMessageSender;

    fn pair(name: &str, symbol: &str, volume_24h: f64) -> CoinRecord {
        CoinRecord {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: "0.042".to_string(),
            volume_24h,
            liquidity: 150_000.0,
            fdv: 50_000_000.0,
            twitter: Some("https://x.com/foo".to_string()),
            telegram: Some("https://t.me/foo".to_string()),
            website: Some("https://foo.io".to_string()),
        }
    }

    #[tokio::test]
    async fn test_only_qualifying_pair_is_sent() {
        let mut source = MockPairSource::new();
        source.expect_fetch_coins().times(1).returning(|| {
            Ok(vec![
                pair("Pair A", "PAIRA", 2_000_000.0),
                pair("Pair B", "PAIRB", 500_000.0),
            ])
        });

        let mut sender = MockMessageSender::new();
        sender
            .expect_send_text()
            .withf(|chat_id, text| {
                *chat_id == -100 && text.contains("Pair A") && text.contains("(PAIRA)")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let pipeline = AlertPipeline::new(
            Arc::new(source),
            Notifier::new(Arc::new(sender), -100),
            FilterThresholds::default(),
        );

        let report = pipeline.run_cycle().await.unwrap();
        assert_eq!(
            report,
            CycleReport {
                fetched: 2,
                matched: 1,
                sent: 1
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_sends_nothing() {
        let mut source = MockPairSource::new();
        source
            .expect_fetch_coins()
            .returning(|| Err(Error::MalformedResponse("pair 0: missing field `fdv`".into())));

        let mut sender = MockMessageSender::new();
        sender.expect_send_text().never();

        let pipeline = AlertPipeline::new(
            Arc::new(source),
            Notifier::new(Arc::new(sender), 1),
            FilterThresholds::default(),
        );

        assert!(matches!(
            pipeline.run_cycle().await,
            Err(Error::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_repeat_cycles_report_again() {
        let mut source = MockPairSource::new();
        source
            .expect_fetch_coins()
            .times(2)
            .returning(|| Ok(vec![pair("Pair A", "PAIRA", 2_000_000.0)]));

        let mut sender = MockMessageSender::new();
        sender.expect_send_text().times(2).returning(|_, _| Ok(()));

        let pipeline = AlertPipeline::new(
            Arc::new(source),
            Notifier::new(Arc::new(sender), 1),
            FilterThresholds::default(),
        );

        assert_eq!(pipeline.run_cycle().await.unwrap().sent, 1);
        assert_eq!(pipeline.run_cycle().await.unwrap().sent, 1);
    }

    #[test]
    fn test_report_display() {
        let report = CycleReport {
            fetched: 30,
            matched: 2,
            sent: 2,
        };
        assert_eq!(report.to_string(), "fetched 30 pairs, 2 matched, 2 alerts sent");
    }
}
