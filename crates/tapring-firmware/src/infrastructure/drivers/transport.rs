use core::net::Ipv4Addr;

use embassy_net::tcp::TcpSocket;
use embassy_net::{IpAddress, Stack};
use embassy_time::Duration;
use tapring::core::net::{Transport, TransportError, exchange_over};

use super::network::resolve_host;

const SOCKET_BUFFER_SIZE: usize = 1024;
const SOCKET_TIMEOUT: Duration = Duration::from_secs(10);

/// One TCP socket per exchange on the station interface
pub(crate) struct EspTransport {
    stack: Stack<'static>,
}

impl EspTransport {
    pub(crate) const fn new(stack: Stack<'static>) -> Self {
        Self { stack }
    }
}

impl Transport for EspTransport {
    async fn exchange(
        &self,
        host: &str,
        port: u16,
        request: &[u8],
        response: &mut [u8],
    ) -> Result<usize, TransportError> {
        let address = resolve_host(self.stack, host)
            .await
            .ok_or(TransportError::Dns)?;

        let mut rx_buffer = [0u8; SOCKET_BUFFER_SIZE];
        let mut tx_buffer = [0u8; SOCKET_BUFFER_SIZE];
        let mut socket = TcpSocket::new(self.stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(SOCKET_TIMEOUT));

        socket.connect((address, port)).await.map_err(|e| {
            log::warn!("transport: connect to {}:{} failed: {:?}", host, port, e);
            TransportError::Connect
        })?;

        let result = exchange_over(&mut socket, request, response).await;
        socket.close();
        result
    }

    async fn reach(&self, address: Ipv4Addr, port: u16) -> Result<(), TransportError> {
        let mut rx_buffer = [0u8; 64];
        let mut tx_buffer = [0u8; 64];
        let mut socket = TcpSocket::new(self.stack, &mut rx_buffer, &mut tx_buffer);

        let connected = socket.connect((IpAddress::Ipv4(address), port)).await;
        socket.abort();
        connected.map_err(|e| {
            log::debug!("transport: {}:{} unreachable: {:?}", address, port, e);
            TransportError::Connect
        })
    }
}
