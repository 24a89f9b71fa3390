use super::headers::find_content_length;
use super::{HttpError, HttpResult};

const HEADER_END: &[u8] = b"\r\n\r\n";

/// Parsed response borrowing the receive buffer
#[derive(Debug, PartialEq, Eq)]
pub struct HttpResponse<'a> {
    pub status: u16,
    pub body: &'a [u8],
}

impl HttpResponse<'_> {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Parse a complete response read until the server closed the connection.
///
/// Without `Content-Length` the body is everything after the headers.
pub fn parse_response(buf: &[u8]) -> HttpResult<HttpResponse<'_>> {
    let header_end = buf
        .windows(HEADER_END.len())
        .position(|w| w == HEADER_END)
        .map(|pos| pos + HEADER_END.len())
        .ok_or(HttpError::Parse)?;

    let heading = core::str::from_utf8(&buf[..header_end]).map_err(|_| HttpError::Parse)?;
    let (status_line, headers) = heading.split_once("\r\n").ok_or(HttpError::Parse)?;
    let status = parse_status_line(status_line).ok_or(HttpError::Parse)?;

    let rest = &buf[header_end..];
    let body = match find_content_length(headers) {
        Some(length) if length > rest.len() => return Err(HttpError::Truncated),
        Some(length) => &rest[..length],
        None => rest,
    };

    Ok(HttpResponse { status, body })
}

/// `HTTP/1.1 200 OK` -> `200`
fn parse_status_line(line: &str) -> Option<u16> {
    let mut parts = line.split_whitespace();
    let version = parts.next()?;
    if !version.starts_with("HTTP/1.") {
        return None;
    }
    let code = parts.next()?;
    if code.len() != 3 {
        return None;
    }
    code.parse().ok()
}
