//! Flappy Bird - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, pipes, collisions, score)
//! - `game`: One iteration of the loop body (input, update, scene)
//! - `renderer`: Scene composition and the wgpu rendering pipeline
//! - `assets`: Sprite manifest loading
//! - `config`: Tuning values and the per-run configuration context

pub mod assets;
pub mod config;
pub mod game;
pub mod input;
pub mod pacing;
pub mod renderer;
pub mod sim;

pub use assets::{AssetError, SpriteSheet};
pub use config::{ConfigError, GameConfig, SpriteMetrics, Tuning};
pub use game::{Control, Game};
pub use input::InputEvent;

/// Game configuration constants
pub mod consts {
    /// Logical display size in pixels
    pub const SCREEN_WIDTH: f32 = 288.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;
    pub const WINDOW_TITLE: &str = "Flappy Bird";

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Magnitude of the upward velocity assigned on flap
    pub const FLAP_STRENGTH: f32 = 6.5;

    /// Horizontal scroll speed of pipes and ground (pixels/frame)
    pub const PIPE_SPEED: f32 = 3.0;
    /// A new pipe spawns once the newest one is this far from the right edge
    pub const PIPE_SPACING: f32 = 185.0;
    /// Vertical opening between top and bottom pipe
    pub const GAP_HEIGHT: f32 = 130.0;
    /// Inclusive range of the random gap center
    pub const GAP_CENTER_MIN: i32 = 100;
    pub const GAP_CENTER_MAX: i32 = 400;

    pub const GROUND_Y: f32 = 450.0;
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_START_Y: f32 = SCREEN_HEIGHT / 2.0;

    /// Shrinks the bird hitbox relative to its sprite
    pub const HITBOX_DEFLATE: f32 = 5.0;

    /// Sprite tilt: degrees per unit of velocity, clamped to [MIN, MAX]
    pub const ROTATION_SCALE: f32 = 3.0;
    pub const ROTATION_MIN: f32 = -90.0;
    pub const ROTATION_MAX: f32 = 30.0;

    /// Frame rate the loop paces itself to
    pub const TARGET_FPS: u32 = 59;
}
