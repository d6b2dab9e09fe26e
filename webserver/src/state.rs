//! Webserver state management

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;

/// Process-wide server facts shared by all handlers
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_address,
            static_dir: static_dir.into(),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_webserver_state_creation() {
        let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

        let state = WebServerState::new(bind_addr, "./static");

        assert_eq!(state.bind_address, bind_addr);
        assert_eq!(state.static_dir, PathBuf::from("./static"));
        assert!(state.get_uptime_seconds() < 5);
    }
}
