#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod constants;
pub mod http;
pub mod myself;
pub mod scene;
#[cfg(test)]
mod settings_file;
pub mod switchbot;
pub mod validate;
pub mod wifi;

pub use config::{ApiEndpoint, SceneIds, SeasonalDevices, Settings, SETTINGS};
pub use scene::{Scene, Season};
