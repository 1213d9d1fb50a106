use crate::error::{Error, Result};
use crate::metrics;
use crate::pipeline::CycleReport;
use log::{error, info};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const STATS_PERIOD: Duration = Duration::from_secs(3600);

/// Fires a job once after `first_run`, then every `interval`.
#[derive(Debug, Clone)]
pub struct Scheduler {
    first_run: Duration,
    interval: Duration,
}

impl Scheduler {
    pub fn new(first_run: Duration, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::ConfigError("scheduler interval must be positive".to_string()));
        }
        Ok(Self { first_run, interval })
    }

    /// Ticks between stats log lines, roughly one line per `STATS_PERIOD`.
    fn stats_every(&self) -> usize {
        let ticks = STATS_PERIOD.as_millis() / self.interval.as_millis().max(1);
        ticks.max(1) as usize
    }

    /// Runs forever. A failed cycle is logged and the next tick still fires.
    pub async fn run<F, Fut>(&self, job: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<CycleReport>>,
    {
        self.drive(None, job).await
    }

    pub async fn run_ticks<F, Fut>(&self, ticks: usize, job: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<CycleReport>>,
    {
        self.drive(Some(ticks), job).await
    }

    async fn drive<F, Fut>(&self, limit: Option<usize>, mut job: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<CycleReport>>,
    {
        let mut ticker = interval_at(Instant::now() + self.first_run, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Alert schedule: first run in {:?}, then every {:?}",
            self.first_run, self.interval
        );

        let stats_every = self.stats_every();
        let mut ticks = 0;
        while limit.map_or(true, |limit| ticks < limit) {
            ticker.tick().await;
            ticks += 1;

            if let Err(e) = job().await {
                metrics::CYCLES_FAILED.inc();
                error!("Alert cycle failed: {}", e);
            }
            if ticks % stats_every == 0 {
                info!("Alert stats: {}", metrics::summary());
            }
        }
    }
}
