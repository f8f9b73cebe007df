// Compiled into the build script, and into the library for its tests only.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::validate::{self, Field};

pub const SETTINGS_PATH_ENV: &str = "SCENE_SETTINGS_PATH";
pub const SETTINGS_FILE: &str = "cfg.toml";
pub const EXAMPLE_SETTINGS_FILE: &str = "cfg.example.toml";

/// Where the settings are read from
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Env(PathBuf),
    Settings,
    Example,
}

impl Source {
    /// Resolution order: `SCENE_SETTINGS_PATH`, then `cfg.toml`, then the example.
    pub fn resolve(env_path: Option<PathBuf>, settings_exists: bool) -> Self {
        match env_path {
            Some(path) => Source::Env(path),
            None if settings_exists => Source::Settings,
            None => Source::Example,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Source::Env(path) => path,
            Source::Settings => Path::new(SETTINGS_FILE),
            Source::Example => Path::new(EXAMPLE_SETTINGS_FILE),
        }
    }
}

fn default_port() -> u16 {
    80
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub switchbot_api_hostname: String,
    pub switchbot_api_token: String,
    pub myself_api_hostname: String,
    pub myself_api_token: String,
    pub summer_device_id: String,
    pub winter_device_id: String,
    pub scene_id_off: String,
    pub scene_id_daylight: String,
    pub scene_id_warm: String,
}

/// Outcome of checking a parsed settings file
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Fields left at the placeholder, reported as warnings
    pub placeholders: Vec<Field>,
    /// Invalid values, any of which fails the build
    pub errors: Vec<validate::Error>,
}

impl RawConfig {
    pub fn parse(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::WifiSsid => &self.wifi_ssid,
            Field::WifiPassword => &self.wifi_password,
            Field::Hostname => &self.hostname,
            Field::SwitchbotApiHostname => &self.switchbot_api_hostname,
            Field::SwitchbotApiToken => &self.switchbot_api_token,
            Field::MyselfApiHostname => &self.myself_api_hostname,
            Field::MyselfApiToken => &self.myself_api_token,
            Field::SummerDeviceId => &self.summer_device_id,
            Field::WinterDeviceId => &self.winter_device_id,
            Field::SceneIdOff => &self.scene_id_off,
            Field::SceneIdDaylight => &self.scene_id_daylight,
            Field::SceneIdWarm => &self.scene_id_warm,
        }
    }

    pub fn check(&self) -> Report {
        let mut report = Report::default();

        for field in Field::ALL {
            let value = self.value(field);
            if validate::is_placeholder(value) {
                report.placeholders.push(field);
            } else if let Err(e) = validate::check(field, value) {
                report.errors.push(e);
            }
        }

        if let Err(e) = validate::port(self.port) {
            report.errors.push(e);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = include_str!("../cfg.example.toml");

    const PROVISIONED: &str = r#"
        wifi_ssid = "home-network"
        wifi_password = "hunter2hunter2"
        hostname = "scene-switch"
        port = 8080
        switchbot_api_hostname = "api.switch-bot.com"
        switchbot_api_token = "sbtoken0123456789"
        myself_api_hostname = "example.com"
        myself_api_token = "owntoken9876"
        summer_device_id = "C271D7A3B1E0"
        winter_device_id = "D8A1B2C3D4E5"
        scene_id_off = "scene-off"
        scene_id_daylight = "scene-daylight"
        scene_id_warm = "scene-warm"
    "#;

    #[test]
    fn example_file_only_warns() {
        let raw = RawConfig::parse(EXAMPLE).unwrap();
        let report = raw.check();
        assert!(report.errors.is_empty());
        assert_eq!(report.placeholders.len(), 10);
        assert_eq!(raw.port, 80);
    }

    #[test]
    fn provisioned_file_is_clean() {
        let raw = RawConfig::parse(PROVISIONED).unwrap();
        assert_eq!(raw.check(), Report::default());
        assert_eq!(raw.port, 8080);
    }

    #[test]
    fn omitted_port_defaults_to_80() {
        let toml_str = PROVISIONED.replace("port = 8080", "");
        let raw = RawConfig::parse(&toml_str).unwrap();
        assert_eq!(raw.port, 80);
    }

    #[test]
    fn unknown_and_missing_keys_are_rejected() {
        let unknown = format!("{PROVISIONED}\nwifi_channel = 6\n");
        assert!(RawConfig::parse(&unknown).is_err());

        let missing = PROVISIONED.replace(r#"scene_id_warm = "scene-warm""#, "");
        assert!(RawConfig::parse(&missing).is_err());
    }

    #[test]
    fn invalid_values_fail_while_placeholders_warn() {
        let toml_str = PROVISIONED
            .replace(r#""scene-switch""#, r#""not a hostname""#)
            .replace("port = 8080", "port = 0")
            .replace(r#""sbtoken0123456789""#, r#""xxxxxxx""#);
        let report = RawConfig::parse(&toml_str).unwrap().check();

        assert_eq!(report.placeholders, vec![Field::SwitchbotApiToken]);
        assert_eq!(
            report.errors,
            vec![
                validate::Error::InvalidHostname(Field::Hostname),
                validate::Error::ZeroPort,
            ]
        );
    }

    #[test]
    fn resolution_prefers_env_then_settings_then_example() {
        let env = PathBuf::from("/etc/scene/cfg.toml");
        assert_eq!(
            Source::resolve(Some(env.clone()), true),
            Source::Env(env.clone())
        );
        assert_eq!(Source::resolve(Some(env.clone()), false).path(), env.as_path());
        assert_eq!(Source::resolve(None, true), Source::Settings);
        assert_eq!(Source::resolve(None, true).path(), Path::new("cfg.toml"));
        assert_eq!(Source::resolve(None, false), Source::Example);
        assert_eq!(
            Source::resolve(None, false).path(),
            Path::new("cfg.example.toml")
        );
    }
}
