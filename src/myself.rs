//! Requests to the user's own backend, authenticated with a bearer token.
use heapless::String;

use crate::config::ApiEndpoint;
use crate::constants::HTTPS_PORT;
use crate::http::{self, Authorization, Method};
use crate::validate;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Http(http::Error),
    NotConfigured,
    InvalidPath,
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::Http(e)
    }
}

pub struct Client<'a> {
    endpoint: &'a ApiEndpoint,
}

impl<'a> Client<'a> {
    pub fn new(endpoint: &'a ApiEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn hostname(&self) -> &'a str {
        self.endpoint.hostname
    }

    pub fn port(&self) -> u16 {
        HTTPS_PORT
    }

    pub fn write_request<const N: usize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
        out: &mut String<N>,
    ) -> Result<(), Error> {
        if validate::is_placeholder(self.endpoint.token) {
            return Err(Error::NotConfigured);
        }
        if !path.starts_with('/') || path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::InvalidPath);
        }

        log::info!("API {} {}{}", method.as_str(), self.endpoint.hostname, path);

        http::write_request_head(
            out,
            method,
            self.endpoint.hostname,
            path,
            Authorization::Bearer(self.endpoint.token),
            body.map(str::len),
        )?;

        if let Some(body) = body {
            out.push_str(body)
                .map_err(|_| Error::Http(http::Error::BufferOverflow))?;
        }

        Ok(())
    }
}
