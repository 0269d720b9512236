//! Data-driven game balance
//!
//! Every empirically tuned value lives here as a named field so an
//! embedding can override it from JSON without recompiling. Defaults
//! come from [`crate::consts`]; unknown fields in an override file are
//! ignored and missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed physics step in seconds
    pub dt: f32,
    /// Gravity in pixels/s^2, y down
    pub gravity: f32,
    /// Letter grid cell edge in pixels
    pub cell_size: f32,
    /// Height the sliding block spawns at
    pub spawn_height: f32,
    /// Delay between a drop and the next spawn, in milliseconds
    pub spawn_delay_ms: u64,
    /// Slide speed in pixels per tick
    pub slide_speed: f32,
    /// Distance from each side edge where the slide reverses
    pub slide_margin: f32,
    /// Jitter force scale, in units of body mass
    pub agitation_scale: f32,
    /// Word whose letters are forced in on the spawn cadence
    pub target_word: String,
    pub block_restitution: f32,
    pub block_friction: f32,
    pub block_density: f32,
    pub ground_restitution: f32,
    pub ground_friction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: consts::SIM_DT,
            gravity: consts::GRAVITY,
            cell_size: consts::CELL_SIZE,
            spawn_height: consts::SPAWN_HEIGHT,
            spawn_delay_ms: consts::SPAWN_DELAY_MS,
            slide_speed: consts::SLIDE_SPEED,
            slide_margin: consts::SLIDE_MARGIN,
            agitation_scale: consts::AGITATION_SCALE,
            target_word: consts::TARGET_WORD.to_string(),
            block_restitution: consts::BLOCK_RESTITUTION,
            block_friction: consts::BLOCK_FRICTION,
            block_density: consts::BLOCK_DENSITY,
            ground_restitution: consts::GROUND_RESTITUTION,
            ground_friction: consts::GROUND_FRICTION,
        }
    }
}

impl Tuning {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to the defaults when the
    /// file is missing or malformed.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {}", path, err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path);
                Self::default()
            }
        }
    }
}
