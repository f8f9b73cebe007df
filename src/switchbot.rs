//! SwitchBot Open API v1.0 requests and responses.
//!
//! The v1.0 API authenticates with the bare token in the `Authorization`
//! header. Every response carries a `statusCode`, where `100` means success.
use alloc::string::String as AllocString;
use core::fmt::Write;
use heapless::String;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ApiEndpoint, SceneIds, SeasonalDevices};
use crate::constants::{HTTPS_PORT, PATH_BUFFER_SIZE};
use crate::http::{self, Authorization, Method};
use crate::scene::{Scene, Season};
use crate::validate;

const API_VERSION: &str = "v1.0";
const STATUS_SUCCESS: u16 = 100;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Http(http::Error),
    /// The token or an ID still holds the example placeholder
    NotConfigured,
    Unauthorized,
    HttpStatus(u16),
    MalformedBody,
    Api(ApiError),
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::Http(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    DeviceTypeError,
    DeviceNotFound,
    CommandNotSupported,
    DeviceOffline,
    HubOffline,
    DeviceInternalError,
    Unexpected(u16),
}

impl ApiError {
    fn from_status_code(code: u16) -> Self {
        match code {
            151 => ApiError::DeviceTypeError,
            152 => ApiError::DeviceNotFound,
            160 => ApiError::CommandNotSupported,
            161 => ApiError::DeviceOffline,
            171 => ApiError::HubOffline,
            190 => ApiError::DeviceInternalError,
            other => ApiError::Unexpected(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    TurnOn,
    TurnOff,
}

impl DeviceCommand {
    const fn body(self) -> &'static str {
        match self {
            DeviceCommand::TurnOn => {
                r#"{"command":"turnOn","parameter":"default","commandType":"command"}"#
            }
            DeviceCommand::TurnOff => {
                r#"{"command":"turnOff","parameter":"default","commandType":"command"}"#
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    ListDevices,
    DeviceStatus(&'a str),
    DeviceCommand {
        device_id: &'a str,
        command: DeviceCommand,
    },
    ListScenes,
    ExecuteScene(&'a str),
}

impl Request<'static> {
    pub fn scene(scene: Scene, scenes: &SceneIds) -> Self {
        Request::ExecuteScene(scene.id(scenes))
    }

    pub fn seasonal(season: Season, command: DeviceCommand, devices: &SeasonalDevices) -> Self {
        Request::DeviceCommand {
            device_id: season.device_id(devices),
            command,
        }
    }
}

impl Request<'_> {
    pub fn method(&self) -> Method {
        match self {
            Request::DeviceCommand { .. } | Request::ExecuteScene(_) => Method::Post,
            _ => Method::Get,
        }
    }

    fn id(&self) -> Option<&str> {
        match *self {
            Request::DeviceStatus(id)
            | Request::DeviceCommand { device_id: id, .. }
            | Request::ExecuteScene(id) => Some(id),
            Request::ListDevices | Request::ListScenes => None,
        }
    }

    pub fn path(&self) -> Result<String<PATH_BUFFER_SIZE>, Error> {
        let mut path = String::new();
        let res = match *self {
            Request::ListDevices => write!(path, "/{API_VERSION}/devices"),
            Request::DeviceStatus(id) => write!(path, "/{API_VERSION}/devices/{id}/status"),
            Request::DeviceCommand { device_id, .. } => {
                write!(path, "/{API_VERSION}/devices/{device_id}/commands")
            }
            Request::ListScenes => write!(path, "/{API_VERSION}/scenes"),
            Request::ExecuteScene(id) => write!(path, "/{API_VERSION}/scenes/{id}/execute"),
        };
        res.map_err(|_| Error::Http(http::Error::BufferOverflow))?;
        Ok(path)
    }

    pub fn body(&self) -> Option<&'static str> {
        match self {
            Request::DeviceCommand { command, .. } => Some(command.body()),
            // no payload, but the POST still carries Content-Length: 0
            Request::ExecuteScene(_) => Some(""),
            _ => None,
        }
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

    /// Writes the complete request (head and body) into `out`.
    pub fn write_request<const N: usize>(
        &self,
        request: &Request<'_>,
        out: &mut String<N>,
    ) -> Result<(), Error> {
        if validate::is_placeholder(self.endpoint.token)
            || request.id().is_some_and(validate::is_placeholder)
        {
            return Err(Error::NotConfigured);
        }

        let path = request.path()?;
        let body = request.body();

        log::info!(
            "SwitchBot {} {}{}",
            request.method().as_str(),
            self.endpoint.hostname,
            path
        );

        http::write_request_head(
            out,
            request.method(),
            self.endpoint.hostname,
            &path,
            Authorization::Token(self.endpoint.token),
            body.map(str::len),
        )?;

        if let Some(body) = body {
            out.push_str(body)
                .map_err(|_| Error::Http(http::Error::BufferOverflow))?;
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    #[serde(default)]
    message: AllocString,
    #[serde(default)]
    body: Value,
}

#[derive(Debug)]
pub struct Response {
    pub message: AllocString,
    pub body: Value,
}

impl Response {
    /// `power` field of a device status response, e.g. `"on"`.
    pub fn power(&self) -> Option<&str> {
        self.body.get("power").and_then(Value::as_str)
    }
}

/// Classifies a response from its HTTP status and JSON body.
pub fn parse_response(http_status: u16, body: &[u8]) -> Result<Response, Error> {
    match http_status {
        200..=299 => {}
        401 => return Err(Error::Unauthorized),
        other => return Err(Error::HttpStatus(other)),
    }

    let raw: RawResponse = serde_json::from_slice(body).map_err(|e| {
        log::error!("Failed to decode SwitchBot response: {:?}", e);
        Error::MalformedBody
    })?;

    if raw.status_code != STATUS_SUCCESS {
        log::error!(
            "SwitchBot returned status {} ({})",
            raw.status_code,
            raw.message
        );
        return Err(Error::Api(ApiError::from_status_code(raw.status_code)));
    }

    Ok(Response {
        message: raw.message,
        body: raw.body,
    })
}
