//! Minimal HTTP/1.1 plumbing
//!
//! Only the request line is ever looked at. Responses are always
//! `200 OK` HTML pages followed by a connection close.

pub mod connection;
pub mod headers;
pub mod request;
pub mod response;

pub use connection::{HttpConnection, HttpHandler, REQUEST_BUFFER_SIZE};
pub use headers::{ContentHeaders, ContentType, ResponseHeaders, TextEncoding};
pub use request::{HttpMethod, RequestLine, parse_request_line};
pub use response::{RESPONSE_BUFFER_SIZE, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The peer reset the connection.
    Closed,
    /// Any other socket failure.
    Io,
    /// The rendered response does not fit its buffer.
    ResponseTooLarge,
}

impl Error {
    /// Classify a socket error.
    pub fn io<E: embedded_io_async::Error>(err: &E) -> Self {
        match err.kind() {
            embedded_io_async::ErrorKind::ConnectionReset
            | embedded_io_async::ErrorKind::BrokenPipe => Error::Closed,
            _ => Error::Io,
        }
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::ResponseTooLarge
    }
}

pub type HttpResult = Result<(), Error>;
