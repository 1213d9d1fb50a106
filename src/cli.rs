use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run a single alert cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Report whether a token's liquidity is locked, then exit
    #[arg(long, value_name = "ADDRESS")]
    pub check_lock: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["meme-alert-bot"]);
        assert!(cli.config.is_none());
        assert!(!cli.once);
        assert!(cli.check_lock.is_none());
    }

    #[test]
    fn test_check_lock_takes_address() {
        let cli = Cli::parse_from([
            "meme-alert-bot",
            "--check-lock",
            "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
            "-d",
        ]);
        assert_eq!(
            cli.check_lock.as_deref(),
            Some("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263")
        );
        assert!(cli.debug);
    }
}
