pub mod http;

use core::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Host name did not resolve
    Dns,
    /// TCP connect failed
    Connect,
    /// Read or write failed on an open connection
    Io,
}

/// Short-lived TCP connections
pub trait Transport {
    /// Connect, send `request`, read until the peer closes or `response` is full
    ///
    /// Returns the number of bytes written into `response`.
    async fn exchange(
        &self,
        host: &str,
        port: u16,
        request: &[u8],
        response: &mut [u8],
    ) -> Result<usize, TransportError>;

    /// Open a connection and close it right away
    async fn reach(&self, address: Ipv4Addr, port: u16) -> Result<(), TransportError>;
}

/// Write `request` to an open stream and read the reply into `response`
///
/// Reads until the peer closes the stream or `response` is full.
pub async fn exchange_over<S>(
    stream: &mut S,
    request: &[u8],
    response: &mut [u8],
) -> Result<usize, TransportError>
where
    S: embedded_io_async::Read + embedded_io_async::Write,
{
    stream.write_all(request).await.map_err(|e| {
        log::debug!("net: write failed: {:?}", e);
        TransportError::Io
    })?;
    stream.flush().await.map_err(|_| TransportError::Io)?;

    let mut filled = 0;
    while filled < response.len() {
        match stream.read(&mut response[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) => {
                log::debug!("net: read failed: {:?}", e);
                return Err(TransportError::Io);
            }
        }
    }
    Ok(filled)
}
