use core::str::FromStr;

use crate::config::{SceneIds, SeasonalDevices};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnknownScene,
    UnknownSeason,
}

/// Lighting scene configured in the SwitchBot app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Off,
    Daylight,
    Warm,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Off, Scene::Daylight, Scene::Warm];

    pub const fn as_str(self) -> &'static str {
        match self {
            Scene::Off => "off",
            Scene::Daylight => "daylight",
            Scene::Warm => "warm",
        }
    }

    pub const fn id(self, scenes: &SceneIds) -> &'static str {
        match self {
            Scene::Off => scenes.off,
            Scene::Daylight => scenes.daylight,
            Scene::Warm => scenes.warm,
        }
    }
}

impl FromStr for Scene {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Scene::ALL
            .into_iter()
            .find(|scene| scene.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownScene)
    }
}

/// Selects which of the two seasonal devices is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub const fn as_str(self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Winter => "winter",
        }
    }

    pub const fn device_id(self, devices: &SeasonalDevices) -> &'static str {
        match self {
            Season::Summer => devices.summer,
            Season::Winter => devices.winter,
        }
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("summer") {
            Ok(Season::Summer)
        } else if s.eq_ignore_ascii_case("winter") {
            Ok(Season::Winter)
        } else {
            Err(ParseError::UnknownSeason)
        }
    }
}
