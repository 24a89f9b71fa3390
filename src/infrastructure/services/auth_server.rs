use core::fmt::Write as _;

use heapless::String;

use crate::config::ServerConfig;
use crate::core::net::Transport;
use crate::core::net::http::{HttpClient, HttpError};
use crate::core::net::TransportError;
use crate::domain::dto::{ServerDecision, TapRequest, TapResponse};
use crate::domain::entity::TagId;
use crate::domain::ports::{BatteryReporter, NetworkError, TapAuthorizer};

const RESPONSE_BUFFER_SIZE: usize = 512;
const TAP_PATH: &str = "/tap";

/// Authorization server reached over HTTP
pub struct HttpAuthServer<'a, T: Transport> {
    client: HttpClient<'a, T>,
    device: &'a str,
}

impl<'a, T: Transport> HttpAuthServer<'a, T> {
    pub const fn new(transport: &'a T, server: &ServerConfig, device: &'a str) -> Self {
        Self {
            client: HttpClient::new(transport, server.host, server.port, server.timeout),
            device,
        }
    }
}

impl<T: Transport> TapAuthorizer for HttpAuthServer<'_, T> {
    async fn authorize(&self, card: &TagId) -> Result<ServerDecision, NetworkError> {
        let request = TapRequest {
            device: self.device,
            card: card.as_str(),
        };
        let mut rx = [0u8; RESPONSE_BUFFER_SIZE];
        let response = self
            .client
            .post_json(TAP_PATH, &request, &mut rx)
            .await
            .map_err(network_error)?;

        if response.status != 200 {
            log::warn!("server: tap {} rejected with {}", card.as_str(), response.status);
            return Err(NetworkError::Status(response.status));
        }

        let (body, _) =
            serde_json_core::from_slice::<TapResponse<'_>>(response.body).map_err(|e| {
                log::warn!("server: tap response parse error: {:?}", e);
                NetworkError::Parse
            })?;
        Ok(ServerDecision::from(body))
    }
}

impl<T: Transport> BatteryReporter for HttpAuthServer<'_, T> {
    async fn report_battery(&self, percentage: u8) -> Result<(), NetworkError> {
        let mut path = String::<16>::new();
        write!(path, "/battery/{percentage}").map_err(|_| NetworkError::BufferOverflow)?;

        let mut rx = [0u8; RESPONSE_BUFFER_SIZE];
        let response = self
            .client
            .get(&path, &mut rx)
            .await
            .map_err(network_error)?;

        if !response.is_success() {
            return Err(NetworkError::Status(response.status));
        }
        Ok(())
    }
}

fn network_error(err: HttpError) -> NetworkError {
    match err {
        HttpError::Transport(TransportError::Dns | TransportError::Connect) => {
            NetworkError::Unreachable
        }
        HttpError::Transport(TransportError::Io) => NetworkError::Io,
        HttpError::Timeout => NetworkError::Timeout,
        HttpError::Parse | HttpError::Truncated => NetworkError::Parse,
        HttpError::FormatHeaders | HttpError::TooLarge | HttpError::Serialize => {
            NetworkError::BufferOverflow
        }
    }
}
