use embassy_time::{Duration, with_timeout};
use heapless::String;
use serde::Serialize;

use super::headers::{BufferedWriter as _, ContentHeaders, ContentType, HttpMethod, RequestHeaders};
use super::response::{HttpResponse, parse_response};
use super::{HttpError, HttpResult};
use crate::core::net::Transport;

const REQUEST_BUFFER_SIZE: usize = 512;
const BODY_BUFFER_SIZE: usize = 256;

/// Minimal HTTP/1.1 client, one connection per request
///
/// Requests always carry `Connection: close`, the response is read until
/// the server hangs up.
pub struct HttpClient<'a, T: Transport> {
    transport: &'a T,
    host: &'a str,
    port: u16,
    timeout: Duration,
}

impl<'a, T: Transport> HttpClient<'a, T> {
    pub const fn new(transport: &'a T, host: &'a str, port: u16, timeout: Duration) -> Self {
        Self {
            transport,
            host,
            port,
            timeout,
        }
    }

    pub async fn get<'b>(&self, path: &str, rx: &'b mut [u8]) -> HttpResult<HttpResponse<'b>> {
        let mut request = String::<REQUEST_BUFFER_SIZE>::new();
        RequestHeaders::new(HttpMethod::Get, path, self.host, self.port).write_to(&mut request)?;
        self.send(request.as_bytes(), rx).await
    }

    pub async fn post_json<'b, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        rx: &'b mut [u8],
    ) -> HttpResult<HttpResponse<'b>> {
        let mut json = [0u8; BODY_BUFFER_SIZE];
        let length =
            serde_json_core::to_slice(body, &mut json).map_err(|_| HttpError::Serialize)?;

        let json = core::str::from_utf8(&json[..length]).map_err(|_| HttpError::Serialize)?;

        let mut request = String::<REQUEST_BUFFER_SIZE>::new();
        RequestHeaders::new(HttpMethod::Post, path, self.host, self.port)
            .with_content(
                ContentHeaders::new_with_content_type(ContentType::Json)
                    .with_content_length(length),
            )
            .write_to(&mut request)?;
        request.push_str(json).map_err(|()| HttpError::TooLarge)?;

        self.send(request.as_bytes(), rx).await
    }

    async fn send<'b>(&self, request: &[u8], rx: &'b mut [u8]) -> HttpResult<HttpResponse<'b>> {
        let received = with_timeout(
            self.timeout,
            self.transport.exchange(self.host, self.port, request, rx),
        )
        .await
        .map_err(|_| HttpError::Timeout)??;

        parse_response(&rx[..received])
    }
}
