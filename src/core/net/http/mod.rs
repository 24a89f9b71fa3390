mod client;
mod headers;
mod response;

pub use client::HttpClient;
pub use headers::{
    BufferedWriter, ConnectionPolicy, ContentHeaders, ContentType, HttpMethod, RequestHeaders,
};
pub use response::{HttpResponse, parse_response};

use crate::core::net::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpError {
    Transport(TransportError),
    Timeout,
    FormatHeaders,
    /// Status line or headers are not valid HTTP/1.x
    Parse,
    /// Body is shorter than its `Content-Length`
    Truncated,
    /// Request does not fit the send buffer
    TooLarge,
    Serialize,
}

impl From<core::fmt::Error> for HttpError {
    fn from(_error: core::fmt::Error) -> Self {
        HttpError::FormatHeaders
    }
}

impl From<TransportError> for HttpError {
    fn from(err: TransportError) -> Self {
        HttpError::Transport(err)
    }
}

pub type HttpResult<T> = Result<T, HttpError>;
