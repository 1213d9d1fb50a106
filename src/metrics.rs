use lazy_static::lazy_static;
use prometheus::{IntCounter, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref CYCLES_RUN: IntCounter = IntCounter::new(
        "alert_cycles_total",
        "Total number of alert cycles started"
    ).expect("metric name is valid");

    pub static ref CYCLES_FAILED: IntCounter = IntCounter::new(
        "alert_cycles_failed_total",
        "Alert cycles aborted by an error"
    ).expect("metric name is valid");

    pub static ref PAIRS_FETCHED: IntCounter = IntCounter::new(
        "pairs_fetched_total",
        "Trading pairs received from DexScreener"
    ).expect("metric name is valid");

    pub static ref ALERTS_SENT: IntCounter = IntCounter::new(
        "alerts_sent_total",
        "Coin alerts delivered to Telegram"
    ).expect("metric name is valid");
}

pub fn init() -> Result<(), prometheus::Error> {
    REGISTRY.register(Box::new(CYCLES_RUN.clone()))?;
    REGISTRY.register(Box::new(CYCLES_FAILED.clone()))?;
    REGISTRY.register(Box::new(PAIRS_FETCHED.clone()))?;
    REGISTRY.register(Box::new(ALERTS_SENT.clone()))?;
    Ok(())
}

/// One-line summary of the counters for periodic log output.
pub fn summary() -> String {
    format!(
        "cycles={} failed={} pairs={} alerts={}",
        CYCLES_RUN.get(),
        CYCLES_FAILED.get(),
        PAIRS_FETCHED.get(),
        ALERTS_SENT.get()
    )
}
