use crate::http::request::Request;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    UnsupportedMethod,
    Incomplete,
}

/// Parses one HTTP request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed (through the blank
/// line ending the header block). Header lines after the request line are
/// consumed and discarded; this server only ever acts on the request line.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let (headers_end, consumed) = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let request_line = headers_str.lines().next().ok_or(ParseError::InvalidRequest)?;
    let request = parse_request_line(request_line)?;

    Ok((request, consumed))
}

/// Parses a bare request line, `METHOD SP PATH [SP VERSION]`.
///
/// Used both for complete requests and for the lenient pass the connection
/// makes when the stream ends before the header block is terminated, which
/// is why a missing version token is tolerated.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    if method != "GET" {
        return Err(ParseError::UnsupportedMethod);
    }

    Ok(Request {
        path: target.trim_start_matches('/').to_string(),
        version: version.to_string(),
    })
}

/// Finds the end of the header block, returning (header length, total
/// length including the terminator). Accepts both CRLF and bare LF
/// terminated blocks.
fn find_headers_end(buf: &[u8]) -> Option<(usize, usize)> {
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n");
    let lf = buf.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(c), Some(l)) if c < l => Some((c, c + 4)),
        (Some(c), None) => Some((c, c + 4)),
        (_, Some(l)) => Some((l, l + 2)),
        (None, None) => None,
    }
}
