// Shared between the build script and the library, so only `core` is used here.
use core::fmt;

/// Value left in the example settings for every field the user must fill in.
pub const PLACEHOLDER: &str = "xxxxxxx";

/// Maximum SSID length in bytes (IEEE 802.11)
pub const SSID_MAX_LEN: usize = 32;
/// Minimum WPA2 passphrase length
pub const PASSPHRASE_MIN_LEN: usize = 8;
/// Maximum WPA2 passphrase length
pub const PASSPHRASE_MAX_LEN: usize = 63;
/// Length of a raw PSK written as hex digits
pub const RAW_PSK_LEN: usize = 64;
/// Maximum DHCP hostname length accepted by the network stack
pub const HOSTNAME_MAX_LEN: usize = 32;
/// Maximum fully qualified domain name length
pub const DOMAIN_MAX_LEN: usize = 253;
/// Maximum length of a single DNS label
pub const LABEL_MAX_LEN: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WifiSsid,
    WifiPassword,
    Hostname,
    SwitchbotApiHostname,
    SwitchbotApiToken,
    MyselfApiHostname,
    MyselfApiToken,
    SummerDeviceId,
    WinterDeviceId,
    SceneIdOff,
    SceneIdDaylight,
    SceneIdWarm,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::WifiSsid,
        Field::WifiPassword,
        Field::Hostname,
        Field::SwitchbotApiHostname,
        Field::SwitchbotApiToken,
        Field::MyselfApiHostname,
        Field::MyselfApiToken,
        Field::SummerDeviceId,
        Field::WinterDeviceId,
        Field::SceneIdOff,
        Field::SceneIdDaylight,
        Field::SceneIdWarm,
    ];

    /// Key of the field in the settings file
    pub const fn key(self) -> &'static str {
        match self {
            Field::WifiSsid => "wifi_ssid",
            Field::WifiPassword => "wifi_password",
            Field::Hostname => "hostname",
            Field::SwitchbotApiHostname => "switchbot_api_hostname",
            Field::SwitchbotApiToken => "switchbot_api_token",
            Field::MyselfApiHostname => "myself_api_hostname",
            Field::MyselfApiToken => "myself_api_token",
            Field::SummerDeviceId => "summer_device_id",
            Field::WinterDeviceId => "winter_device_id",
            Field::SceneIdOff => "scene_id_off",
            Field::SceneIdDaylight => "scene_id_daylight",
            Field::SceneIdWarm => "scene_id_warm",
        }
    }

    /// Secret fields must never end up in logs
    pub const fn is_secret(self) -> bool {
        matches!(
            self,
            Field::WifiPassword | Field::SwitchbotApiToken | Field::MyselfApiToken
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty(Field),
    TooLong { field: Field, max: usize },
    PasswordTooShort,
    InvalidHostname(Field),
    InvalidCharacter(Field),
    ZeroPort,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty(field) => write!(f, "{field} must not be empty"),
            Error::TooLong { field, max } => write!(f, "{field} is longer than {max} bytes"),
            Error::PasswordTooShort => write!(
                f,
                "wifi_password must be empty (open network) or at least {PASSPHRASE_MIN_LEN} characters"
            ),
            Error::InvalidHostname(field) => write!(f, "{field} is not a valid hostname"),
            Error::InvalidCharacter(field) => write!(f, "{field} contains an invalid character"),
            Error::ZeroPort => write!(f, "port must not be 0"),
        }
    }
}

pub fn is_placeholder(value: &str) -> bool {
    value.trim() == PLACEHOLDER
}

/// Validates `value` with the rule that applies to `field`.
pub fn check(field: Field, value: &str) -> Result<(), Error> {
    match field {
        Field::WifiSsid => wifi_ssid(value),
        Field::WifiPassword => wifi_password(value),
        Field::Hostname => hostname(value),
        Field::SwitchbotApiHostname | Field::MyselfApiHostname => domain(field, value),
        Field::SwitchbotApiToken | Field::MyselfApiToken => token(field, value),
        Field::SummerDeviceId
        | Field::WinterDeviceId
        | Field::SceneIdOff
        | Field::SceneIdDaylight
        | Field::SceneIdWarm => identifier(field, value),
    }
}

pub fn wifi_ssid(value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty(Field::WifiSsid));
    }
    if value.len() > SSID_MAX_LEN {
        return Err(Error::TooLong {
            field: Field::WifiSsid,
            max: SSID_MAX_LEN,
        });
    }
    Ok(())
}

pub fn wifi_password(value: &str) -> Result<(), Error> {
    // empty means an open network
    if value.is_empty() {
        return Ok(());
    }

    if value.len() == RAW_PSK_LEN {
        // 64 bytes can only be a raw PSK
        return if value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(())
        } else {
            Err(Error::InvalidCharacter(Field::WifiPassword))
        };
    }

    if value.len() < PASSPHRASE_MIN_LEN {
        return Err(Error::PasswordTooShort);
    }
    if value.len() > PASSPHRASE_MAX_LEN {
        return Err(Error::TooLong {
            field: Field::WifiPassword,
            max: PASSPHRASE_MAX_LEN,
        });
    }
    if !value.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        return Err(Error::InvalidCharacter(Field::WifiPassword));
    }
    Ok(())
}

/// DHCP hostname: a single DNS label.
pub fn hostname(value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty(Field::Hostname));
    }
    if value.len() > HOSTNAME_MAX_LEN {
        return Err(Error::TooLong {
            field: Field::Hostname,
            max: HOSTNAME_MAX_LEN,
        });
    }
    if !is_label(value) {
        return Err(Error::InvalidHostname(Field::Hostname));
    }
    Ok(())
}

/// Fully qualified API hostname, e.g. `api.switch-bot.com`.
pub fn domain(field: Field, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty(field));
    }
    if value.len() > DOMAIN_MAX_LEN {
        return Err(Error::TooLong {
            field,
            max: DOMAIN_MAX_LEN,
        });
    }
    if !value.split('.').all(is_label) {
        return Err(Error::InvalidHostname(field));
    }
    Ok(())
}

/// Tokens are written verbatim into an `Authorization` header.
pub fn token(field: Field, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty(field));
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::InvalidCharacter(field));
    }
    Ok(())
}

/// Device and scene IDs are written into a request path.
pub fn identifier(field: Field, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty(field));
    }
    if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#' | '%'))
    {
        return Err(Error::InvalidCharacter(field));
    }
    Ok(())
}

pub fn port(value: u16) -> Result<(), Error> {
    if value == 0 {
        return Err(Error::ZeroPort);
    }
    Ok(())
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= LABEL_MAX_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
