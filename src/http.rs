//! Minimal HTTP/1.1 request heads written into fixed-size buffers.
use core::fmt::Write;
use heapless::String;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    BufferOverflow,
    MalformedStatusLine,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::BufferOverflow
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Value of the `Authorization` header
#[derive(Clone, Copy)]
pub enum Authorization<'a> {
    /// The bare token, as the SwitchBot v1.0 API expects
    Token(&'a str),
    Bearer(&'a str),
}

pub fn write_request_head<const N: usize>(
    out: &mut String<N>,
    method: Method,
    host: &str,
    path: &str,
    authorization: Authorization<'_>,
    body_len: Option<usize>,
) -> Result<(), Error> {
    write!(out, "{} {} HTTP/1.1\r\nHost: {}\r\n", method.as_str(), path, host)?;

    match authorization {
        Authorization::Token(token) => write!(out, "Authorization: {}\r\n", token)?,
        Authorization::Bearer(token) => write!(out, "Authorization: Bearer {}\r\n", token)?,
    }

    match body_len {
        Some(0) => write!(out, "Content-Length: 0\r\n")?,
        Some(len) => write!(
            out,
            "Content-Type: application/json; charset=utf8\r\nContent-Length: {}\r\n",
            len
        )?,
        None => {}
    }

    out.push_str("Connection: close\r\n\r\n")
        .map_err(|_| Error::BufferOverflow)
}

/// Extracts the status code from a line such as `HTTP/1.1 200 OK`.
pub fn parse_status_line(line: &str) -> Result<u16, Error> {
    let mut parts = line.trim_end().splitn(3, ' ');

    let version = parts.next().ok_or(Error::MalformedStatusLine)?;
    if !version.starts_with("HTTP/") {
        return Err(Error::MalformedStatusLine);
    }

    let code = parts.next().ok_or(Error::MalformedStatusLine)?;
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedStatusLine);
    }

    let code: u16 = code.parse().map_err(|_| Error::MalformedStatusLine)?;
    if !(100..=599).contains(&code) {
        return Err(Error::MalformedStatusLine);
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_head_has_no_body_headers() {
        let mut out: String<256> = String::new();
        write_request_head(
            &mut out,
            Method::Get,
            "api.switch-bot.com",
            "/v1.0/devices",
            Authorization::Token("abc"),
            None,
        )
        .unwrap();

        assert_eq!(
            out.as_str(),
            "GET /v1.0/devices HTTP/1.1\r\n\
             Host: api.switch-bot.com\r\n\
             Authorization: abc\r\n\
             Connection: close\r\n\r\n"
        );
    }

    #[test]
    fn post_head_announces_json_body() {
        let mut out: String<256> = String::new();
        write_request_head(
            &mut out,
            Method::Post,
            "example.com",
            "/status",
            Authorization::Bearer("xyz"),
            Some(17),
        )
        .unwrap();

        assert!(out.starts_with("POST /status HTTP/1.1\r\n"));
        assert!(out.contains("Authorization: Bearer xyz\r\n"));
        assert!(out.contains("Content-Length: 17\r\n"));
        assert!(out.ends_with("\r\n\r\n"));
    }

    #[test]
    fn small_buffer_overflows() {
        let mut out: String<16> = String::new();
        let res = write_request_head(
            &mut out,
            Method::Get,
            "example.com",
            "/",
            Authorization::Token("t"),
            None,
        );
        assert_eq!(res, Err(Error::BufferOverflow));
    }

    #[test]
    fn status_line_parsing() {
        assert_eq!(parse_status_line("HTTP/1.1 200 OK\r\n"), Ok(200));
        assert_eq!(parse_status_line("HTTP/1.0 401"), Ok(401));
        assert_eq!(
            parse_status_line("HTTP/1.1 20 OK"),
            Err(Error::MalformedStatusLine)
        );
        assert_eq!(
            parse_status_line("HTTP/1.1 +20 OK"),
            Err(Error::MalformedStatusLine)
        );
        assert_eq!(
            parse_status_line("HTTP/1.1 000 Nothing"),
            Err(Error::MalformedStatusLine)
        );
        assert_eq!(
            parse_status_line("HTTP/1.1 600 Beyond"),
            Err(Error::MalformedStatusLine)
        );
        assert_eq!(parse_status_line("HTTP/1.1 599 Edge"), Ok(599));
        assert_eq!(parse_status_line("garbage"), Err(Error::MalformedStatusLine));
        assert_eq!(parse_status_line(""), Err(Error::MalformedStatusLine));
    }
}
