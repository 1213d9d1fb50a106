pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod notifier;
pub mod pipeline;
pub mod scheduler;
pub mod telegram;

pub use error::{Error, Result};
