/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capacity of the SSID buffer handed to the radio driver
pub const WIFI_SSID_BUFFER_SIZE: usize = 32;
/// Capacity of the password buffer handed to the radio driver (64 for a raw PSK)
pub const WIFI_PASSWORD_BUFFER_SIZE: usize = 64;
/// Capacity of the DHCP hostname buffer
pub const DHCP_HOSTNAME_BUFFER_SIZE: usize = 32;

/// Size of the buffer holding a request path
pub const PATH_BUFFER_SIZE: usize = 128;
/// Size of the buffer holding a complete request (head and body)
pub const REQUEST_BUFFER_SIZE: usize = 768;

/// Port used for HTTPS API requests
pub const HTTPS_PORT: u16 = 443;
