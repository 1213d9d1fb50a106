use anyhow::Result;
use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Appends timestamped lines to a log file.
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn new(log_file: &Path, level: LevelFilter) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;

        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(
                file,
                "{} [{}] {}: {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Logs to `log_file` when given, otherwise to stderr via `env_logger` (honours `RUST_LOG`).
pub fn init(log_file: Option<&Path>, debug: bool) -> Result<()> {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };

    match log_file {
        Some(path) => {
            let logger = FileLogger::new(path, level)?;
            log::set_boxed_logger(Box::new(logger))?;
            log::set_max_level(level);
        }
        None => {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
            )
            .try_init()?;
        }
    }
    Ok(())
}
