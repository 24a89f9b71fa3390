use core::fmt::Write;

/// HTTP Content Type.
#[derive(Debug, Clone, Copy)]
pub enum ContentType {
    Json,
}

impl ContentType {
    /// Convert the content type to a string.
    fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug, Clone, Copy)]
pub enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    /// Convert the connection type to a string.
    fn as_str(self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

pub trait BufferedWriter {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
}

impl ContentHeaders {
    /// Create a new content headers with a content type.
    pub const fn new_with_content_type(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
        }
    }

    /// Set the content length.
    #[must_use]
    pub const fn with_content_length(mut self, content_length: usize) -> Self {
        self.content_length = Some(content_length);
        self
    }
}

impl BufferedWriter for ContentHeaders {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}\r\n", self.content_type.as_str())?;
        if let Some(content_length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", content_length)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Request line and headers of an outgoing request.
pub struct RequestHeaders<'a> {
    method: HttpMethod,
    path: &'a str,
    host: &'a str,
    port: u16,
    connection: ConnectionPolicy,
    content: Option<ContentHeaders>,
}

impl<'a> RequestHeaders<'a> {
    pub const fn new(method: HttpMethod, path: &'a str, host: &'a str, port: u16) -> Self {
        Self {
            method,
            path,
            host,
            port,
            connection: ConnectionPolicy::Close,
            content: None,
        }
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }
}

impl BufferedWriter for RequestHeaders<'_> {
    /// Write the request line and headers to a writer.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "{} {} HTTP/1.1\r\n", self.method.as_str(), self.path)?;
        write!(writer, "Host: {}:{}\r\n", self.host, self.port)?;
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }
        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        write!(writer, "\r\n")?;
        Ok(())
    }
}

/// Find the content length in the header block.
///
/// Returns the content length if found, otherwise None.
pub(super) fn find_content_length(header: &str) -> Option<usize> {
    const TARGET: &str = "content-length:";
    for line in header.lines() {
        let Some(name) = line.get(..TARGET.len()) else {
            continue;
        };
        if name.eq_ignore_ascii_case(TARGET) {
            return line[TARGET.len()..].trim().parse::<usize>().ok();
        }
    }
    None
}
