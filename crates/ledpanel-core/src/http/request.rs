/// Longest path kept from a request line; longer paths never match a route.
pub const MAX_PATH_LEN: usize = 64;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            "HEAD" => HttpMethod::Head,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// Method and path of a request, without the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: HttpMethod,
    pub path: heapless::String<MAX_PATH_LEN>,
}

/// Tokenize the first line of a raw request.
///
/// Headers and body are ignored. Returns `None` when the line has no known
/// method or no path, or when the path does not fit [`MAX_PATH_LEN`].
pub fn parse_request_line(raw: &[u8]) -> Option<RequestLine> {
    let line_end = raw
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(raw.len());
    let first_line = core::str::from_utf8(&raw[..line_end]).ok()?;

    let mut parts = first_line.split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;
    let raw_path = target.split_once('?').map_or(target, |(path, _query)| path);

    let mut path = heapless::String::new();
    path.push_str(raw_path).ok()?;
    Some(RequestLine { method, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_and_path() {
        let line = parse_request_line(b"GET /blue_up HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
        assert_eq!(line.method, HttpMethod::Get);
        assert_eq!(line.path.as_str(), "/blue_up");
    }

    #[test]
    fn strips_query_string() {
        let line = parse_request_line(b"GET /alarm? HTTP/1.1\r\n").unwrap();
        assert_eq!(line.path.as_str(), "/alarm");

        let line = parse_request_line(b"GET /?x=/alarm HTTP/1.1\r\n").unwrap();
        assert_eq!(line.path.as_str(), "/");
    }

    #[test]
    fn accepts_line_without_terminator() {
        let line = parse_request_line(b"POST /timer").unwrap();
        assert_eq!(line.method, HttpMethod::Post);
        assert_eq!(line.path.as_str(), "/timer");
    }

    #[test]
    fn ignores_matches_outside_first_line() {
        let line = parse_request_line(b"GET / HTTP/1.1\r\nReferer: /alarm\r\n\r\n").unwrap();
        assert_eq!(line.path.as_str(), "/");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_request_line(b""), None);
        assert_eq!(parse_request_line(b"FETCH /blue_up HTTP/1.1\r\n"), None);
        assert_eq!(parse_request_line(b"GET\r\n"), None);
        assert_eq!(parse_request_line(&[0xff, 0xfe, b' ', b'/']), None);
    }

    #[test]
    fn rejects_oversized_path() {
        let mut raw = std::vec::Vec::from(&b"GET /"[..]);
        raw.extend(core::iter::repeat_n(b'a', MAX_PATH_LEN));
        assert_eq!(parse_request_line(&raw), None);
    }
}
