use crate::error::Result;
use crate::models::CoinRecord;
use async_trait::async_trait;

pub mod dexscreener;
pub mod solscan;

pub use dexscreener::DexScreenerClient;
pub use solscan::LiquidityLockChecker;

/// Anything that can produce one cycle's worth of coin snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PairSource: Send + Sync {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>>;
}

#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers a single HTTP request with a canned response; returns the base URL.
    pub async fn serve_once(status: u16, reason: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/", addr)
    }

    /// A local URL with nothing listening on it.
    pub async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/", addr)
    }
}
