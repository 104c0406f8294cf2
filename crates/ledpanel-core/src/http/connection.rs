use embassy_time::Instant;
use embedded_io_async::{Read, Write};

use super::{
    Error,
    HttpResult,
    request::{RequestLine, parse_request_line},
    response::Response,
};

/// Bytes kept from one delivery. Only the request line is interpreted.
pub const REQUEST_BUFFER_SIZE: usize = 512;

/// A trait for handling one request on an accepted connection.
#[allow(async_fn_in_trait)]
pub trait HttpHandler {
    async fn handle_request<S: Read + Write>(
        &mut self,
        conn: &mut HttpConnection<'_, S>,
        now: Instant,
    ) -> HttpResult;
}

/// HTTP connection context
pub struct HttpConnection<'a, S> {
    socket: &'a mut S,
    request: Option<RequestLine>,
}

impl<'a, S: Read + Write> HttpConnection<'a, S> {
    /// Receive one delivery from the socket.
    ///
    /// Returns `Ok(None)` when the peer closed the connection before sending
    /// anything. The received bytes are dropped once the request line has
    /// been tokenized.
    pub async fn from_socket(socket: &'a mut S) -> Result<Option<Self>, Error> {
        let mut buf = [0u8; REQUEST_BUFFER_SIZE];
        let n = socket.read(&mut buf).await.map_err(|e| Error::io(&e))?;
        if n == 0 {
            return Ok(None);
        }

        let request = parse_request_line(&buf[..n]);
        if request.is_none() {
            log::debug!("http: unparsed request line ({} bytes)", n);
        }
        Ok(Some(Self { socket, request }))
    }

    /// The tokenized request line, if it was well-formed.
    pub fn request(&self) -> Option<&RequestLine> {
        self.request.as_ref()
    }

    /// Write the whole response and flush it out.
    pub async fn write_response<const N: usize>(&mut self, response: &Response<N>) -> HttpResult {
        self.socket
            .write_all(response.as_bytes())
            .await
            .map_err(|e| Error::io(&e))?;
        self.socket.flush().await.map_err(|e| Error::io(&e))?;
        Ok(())
    }
}
