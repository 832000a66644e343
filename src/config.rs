//! Gameplay tuning and the per-run configuration context
//!
//! `Tuning` defaults to the compile-time constants in [`crate::consts`]; a JSON
//! file can override any subset of its fields.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning overrides
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Physics and layout values used by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub flap_strength: f32,
    pub pipe_speed: f32,
    pub pipe_spacing: f32,
    pub gap_height: f32,
    pub gap_center_min: i32,
    pub gap_center_max: i32,
    pub ground_y: f32,
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub hitbox_deflate: f32,
    pub rotation_scale: f32,
    pub rotation_min: f32,
    pub rotation_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            pipe_speed: PIPE_SPEED,
            pipe_spacing: PIPE_SPACING,
            gap_height: GAP_HEIGHT,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
            ground_y: GROUND_Y,
            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            hitbox_deflate: HITBOX_DEFLATE,
            rotation_scale: ROTATION_SCALE,
            rotation_min: ROTATION_MIN,
            rotation_max: ROTATION_MAX,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate a tuning file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("flap_strength", self.flap_strength),
            ("pipe_speed", self.pipe_speed),
            ("pipe_spacing", self.pipe_spacing),
            ("gap_height", self.gap_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.hitbox_deflate >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "hitbox_deflate must not be negative, got {}",
                self.hitbox_deflate
            )));
        }
        if self.gap_center_min > self.gap_center_max {
            return Err(ConfigError::Invalid(format!(
                "gap_center_min ({}) exceeds gap_center_max ({})",
                self.gap_center_min, self.gap_center_max
            )));
        }
        if self.rotation_min > self.rotation_max {
            return Err(ConfigError::Invalid(format!(
                "rotation_min ({}) exceeds rotation_max ({})",
                self.rotation_min, self.rotation_max
            )));
        }
        Ok(())
    }
}

/// Pixel sizes of the sprites the simulation measures against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    pub bird: Vec2,
    pub pipe_top: Vec2,
    pub pipe_bottom: Vec2,
    pub ground: Vec2,
}

impl SpriteMetrics {
    /// Sizes of the classic Flappy Bird sprite set
    pub const CLASSIC: Self = Self {
        bird: Vec2::new(34.0, 24.0),
        pipe_top: Vec2::new(52.0, 320.0),
        pipe_bottom: Vec2::new(52.0, 320.0),
        ground: Vec2::new(336.0, 112.0),
    };
}

/// Everything the simulation reads but never mutates, built once at startup
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub metrics: SpriteMetrics,
}

impl GameConfig {
    pub fn new(tuning: Tuning, metrics: SpriteMetrics) -> Self {
        Self { tuning, metrics }
    }

    /// Check the tuning on its own and against the loaded sprite sizes
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        let hitbox = self.metrics.bird - Vec2::splat(self.tuning.hitbox_deflate);
        if hitbox.x <= 0.0 || hitbox.y <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "hitbox_deflate {} leaves no hitbox for a {}x{} bird",
                self.tuning.hitbox_deflate, self.metrics.bird.x, self.metrics.bird.y
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Tuning::default(), SpriteMetrics::CLASSIC)
    }
}
