use core::str::FromStr;
use heapless::String;

use crate::config::Settings;
use crate::constants::{
    DHCP_HOSTNAME_BUFFER_SIZE, WIFI_PASSWORD_BUFFER_SIZE, WIFI_SSID_BUFFER_SIZE,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    SsidTooLong,
    PasswordTooLong,
    HostnameTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Open,
    Wpa2Personal,
}

/// Station credentials sized for the radio driver's client configuration.
pub struct WifiCredentials {
    pub ssid: String<WIFI_SSID_BUFFER_SIZE>,
    pub password: String<WIFI_PASSWORD_BUFFER_SIZE>,
    pub auth: AuthMethod,
}

impl WifiCredentials {
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        let ssid = String::from_str(settings.wifi_ssid).map_err(|_| Error::SsidTooLong)?;
        let password =
            String::from_str(settings.wifi_password).map_err(|_| Error::PasswordTooLong)?;

        let auth = if password.is_empty() {
            AuthMethod::Open
        } else {
            AuthMethod::Wpa2Personal
        };

        log::debug!("Wi-Fi credentials for {:?} ({:?})", ssid, auth);

        Ok(Self {
            ssid,
            password,
            auth,
        })
    }
}

impl core::fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

pub fn dhcp_hostname(settings: &Settings) -> Result<String<DHCP_HOSTNAME_BUFFER_SIZE>, Error> {
    String::from_str(settings.hostname).map_err(|_| Error::HostnameTooLong)
}
