use heapless::Vec;

use super::{
    Error,
    headers::{ContentHeaders, ContentType, ResponseHeaders, TargetWriter as _, TextEncoding},
};

/// Capacity of a rendered response, headers included.
pub const RESPONSE_BUFFER_SIZE: usize = 3072;

/// A complete HTTP response, ready to be written to a socket.
pub struct Response<const N: usize = RESPONSE_BUFFER_SIZE> {
    buf: Vec<u8, N>,
}

impl<const N: usize> Response<N> {
    /// Build a `200 OK` HTML response around `body`.
    pub fn html(body: &str) -> Result<Self, Error> {
        let headers = ResponseHeaders::success().with_content(
            ContentHeaders::new(ContentType::TextHtml)
                .with_text_encoding(TextEncoding::Utf8)
                .with_length(body.len()),
        );

        let mut buf = Vec::new();
        headers.write_to(&mut buf)?;
        buf.extend_from_slice(body.as_bytes())
            .map_err(|()| Error::ResponseTooLarge)?;
        Ok(Self { buf })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_precede_body() {
        let response = Response::<256>::html("<p>hi</p>").unwrap();
        let text = core::str::from_utf8(response.as_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 9\r\n"));
        assert!(text.ends_with("\r\n\r\n<p>hi</p>"));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            Response::<64>::html("<p>far too long for sixty-four bytes of headers</p>").err(),
            Some(Error::ResponseTooLarge)
        );
    }
}
