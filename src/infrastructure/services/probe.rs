use core::net::Ipv4Addr;

use embassy_time::{Duration, with_timeout};

use crate::config::AdminConfig;
use crate::core::net::Transport;
use crate::domain::ports::ConnectivityProbe;

/// Reachability check by opening a TCP connection to a well-known host
pub struct TcpProbe<'a, T: Transport> {
    transport: &'a T,
    address: Ipv4Addr,
    port: u16,
    timeout: Duration,
}

impl<'a, T: Transport> TcpProbe<'a, T> {
    pub const fn new(transport: &'a T, config: &AdminConfig) -> Self {
        Self {
            transport,
            address: config.probe_address,
            port: config.probe_port,
            timeout: config.probe_timeout,
        }
    }
}

impl<T: Transport> ConnectivityProbe for TcpProbe<'_, T> {
    async fn is_online(&self) -> bool {
        match with_timeout(self.timeout, self.transport.reach(self.address, self.port)).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log::info!("probe: {}:{} unreachable: {:?}", self.address, self.port, e);
                false
            }
            Err(_) => {
                log::info!("probe: {}:{} timed out", self.address, self.port);
                false
            }
        }
    }
}
