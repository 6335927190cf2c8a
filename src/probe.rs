// src/probe.rs
//! TCP reachability probing of discovered hosts

use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

use crate::types::Reachability;

pub const DEFAULT_PROBE_PORT: u16 = 443;
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 3;

/// Plain TCP connect check; no TLS handshake is attempted
#[derive(Debug, Clone)]
pub struct Prober {
    port: u16,
    timeout: Duration,
}

impl Prober {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    /// Connect to `host:port`; name resolution counts against the timeout
    pub async fn probe(&self, host: &str) -> Reachability {
        let connect = TcpStream::connect((host, self.port));

        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_stream)) => {
                debug!("{}:{} reachable", host, self.port);
                Reachability::Yes
            }
            Ok(Err(e)) => {
                debug!("{}:{} unreachable: {}", host, self.port, e);
                Reachability::No
            }
            Err(_) => {
                debug!("{}:{} timed out after {:?}", host, self.port, self.timeout);
                Reachability::No
            }
        }
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROBE_PORT,
            Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        )
    }
}
