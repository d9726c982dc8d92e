use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

use crate::ring;
use crate::velocity;
use crate::wheel;

/// Snap granularity for the clock ring, in minutes. Accepts the ways people
/// actually write it in a config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[strum(serialize = "Five", serialize = "5")]
    Five,
    #[strum(serialize = "Ten", serialize = "10")]
    Ten,
    #[strum(serialize = "Quarter", serialize = "15", serialize = "fifteen")]
    Quarter,
    #[strum(serialize = "Half", serialize = "30", serialize = "thirty")]
    Half,
    #[strum(serialize = "Hour", serialize = "60")]
    Hour,
}

impl Granularity {
    pub fn minutes(&self) -> u16 {
        match self {
            Granularity::Five => 5,
            Granularity::Ten => 10,
            Granularity::Quarter => 15,
            Granularity::Half => 30,
            Granularity::Hour => 60,
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Quarter
    }
}

/// Tuning for the multi-target jog wheel. Defaults mirror the dial these
/// numbers were lifted from; they are tunable, not load-bearing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Degrees of drag per unit of value at multiplier 1.
    pub tick_distance: f64,
    /// How far (degrees) from a wedge centerline a press still selects it.
    pub touch_slop: f64,
    /// Degrees of arc left open for a target's label.
    pub name_gap: f64,
    /// Converts |rpm| into the drag multiplier.
    pub speed_scale: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            tick_distance: wheel::TICK_DISTANCE,
            touch_slop: wheel::TOUCH_SLOP,
            name_gap: wheel::NAME_GAP,
            speed_scale: velocity::SPEED_SCALE,
        }
    }
}

/// Tuning for the clock ring.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RingConfig {
    /// Duration picks snap to this granularity.
    pub snap: Granularity,
    /// The volume slider never restores below this fraction.
    pub min_volume: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            snap: Granularity::default(),
            min_volume: ring::MIN_VOLUME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct DialConfig {
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub ring: RingConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "jogdial", "jogdial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<DialConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("JOGDIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> DialConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            DialConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
