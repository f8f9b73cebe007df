use core::fmt;

use crate::constants::VERSION;
use crate::validate::{self, Field};

pub struct Settings {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password), empty for an open network
    pub wifi_password: &'static str,

    // DHCP hostname of the device
    pub hostname: &'static str,

    // Port of the device's own HTTP server
    pub port: u16,

    // SwitchBot Open API host and token
    pub switchbot: ApiEndpoint,

    // Own backend API host and token
    pub myself: ApiEndpoint,

    // SwitchBot devices switched by season
    pub devices: SeasonalDevices,

    // SwitchBot scenes
    pub scenes: SceneIds,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub hostname: &'static str,
    pub token: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SeasonalDevices {
    pub summer: &'static str,
    pub winter: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SceneIds {
    pub off: &'static str,
    pub daylight: &'static str,
    pub warm: &'static str,
}

// settings are generated at compile time from cfg.toml
include!(concat!(env!("OUT_DIR"), "/config.rs"));

impl Settings {
    pub fn value(&self, field: Field) -> &'static str {
        match field {
            Field::WifiSsid => self.wifi_ssid,
            Field::WifiPassword => self.wifi_password,
            Field::Hostname => self.hostname,
            Field::SwitchbotApiHostname => self.switchbot.hostname,
            Field::SwitchbotApiToken => self.switchbot.token,
            Field::MyselfApiHostname => self.myself.hostname,
            Field::MyselfApiToken => self.myself.token,
            Field::SummerDeviceId => self.devices.summer,
            Field::WinterDeviceId => self.devices.winter,
            Field::SceneIdOff => self.scenes.off,
            Field::SceneIdDaylight => self.scenes.daylight,
            Field::SceneIdWarm => self.scenes.warm,
        }
    }

    /// Fields still holding the example placeholder
    pub fn placeholders(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |field| validate::is_placeholder(self.value(*field)))
    }

    pub fn is_provisioned(&self) -> bool {
        self.placeholders().next().is_none()
    }

    /// Re-runs the build time checks. Placeholders are not errors here either.
    pub fn validate(&self) -> Result<(), validate::Error> {
        for field in Field::ALL {
            let value = self.value(field);
            if !validate::is_placeholder(value) {
                validate::check(field, value)?;
            }
        }
        validate::port(self.port)
    }

    /// Logs the settings without secrets, warning about every unset field.
    pub fn log_summary(&self) {
        log::info!(
            "Settings v{}: ssid={:?} hostname={:?} port={}",
            VERSION,
            Masked::plain(self.wifi_ssid),
            Masked::plain(self.hostname),
            self.port
        );
        log::info!(
            "APIs: switchbot={} own={}",
            self.switchbot.hostname,
            self.myself.hostname
        );

        for field in self.placeholders() {
            log::warn!("{} is not set, copy cfg.example.toml to cfg.toml", field);
        }
    }
}

/// Renders a setting for logs and `Debug` output.
struct Masked {
    value: &'static str,
    secret: bool,
}

impl Masked {
    fn plain(value: &'static str) -> Self {
        Masked {
            value,
            secret: false,
        }
    }

    fn secret(value: &'static str) -> Self {
        Masked {
            value,
            secret: true,
        }
    }
}

impl fmt::Debug for Masked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if validate::is_placeholder(self.value) {
            f.write_str("<placeholder>")
        } else if !self.secret {
            write!(f, "{:?}", self.value)
        } else if self.value.is_empty() {
            f.write_str("<empty>")
        } else {
            f.write_str("<redacted>")
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("wifi_ssid", &Masked::plain(self.wifi_ssid))
            .field("wifi_password", &Masked::secret(self.wifi_password))
            .field("hostname", &Masked::plain(self.hostname))
            .field("port", &self.port)
            .field("switchbot", &self.switchbot)
            .field("myself", &self.myself)
            .field("devices", &self.devices)
            .field("scenes", &self.scenes)
            .finish()
    }
}

impl fmt::Debug for SeasonalDevices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeasonalDevices")
            .field("summer", &Masked::plain(self.summer))
            .field("winter", &Masked::plain(self.winter))
            .finish()
    }
}

impl fmt::Debug for SceneIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneIds")
            .field("off", &Masked::plain(self.off))
            .field("daylight", &Masked::plain(self.daylight))
            .field("warm", &Masked::plain(self.warm))
            .finish()
    }
}

impl fmt::Debug for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiEndpoint")
            .field("hostname", &self.hostname)
            .field("token", &Masked::secret(self.token))
            .finish()
    }
}
