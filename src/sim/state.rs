//! Game state and core simulation types

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Tuning;

/// Current mode of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Waiting for the first flap; physics frozen
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Bird crashed; waiting for a flap to restart
    GameOver,
}

/// The player's bird. Horizontal position is fixed by the tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge of the sprite (pixels, y down)
    pub y: f32,
    /// Pixels per frame, positive = falling
    pub velocity: f32,
}

impl Bird {
    pub fn new(start_y: f32) -> Self {
        Self {
            y: start_y,
            velocity: 0.0,
        }
    }

    /// Explicit Euler step: velocity first, then position
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    #[inline]
    pub fn flap(&mut self, strength: f32) {
        self.velocity = -strength;
    }
}

/// One top + bottom obstacle sharing a vertical gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge (pixels)
    pub x: f32,
    /// Vertical midpoint of the gap, fixed at spawn
    pub gap_center: i32,
    /// Set once the bird has passed this pipe's midpoint
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center: i32) -> Self {
        Self {
            x,
            gap_center,
            scored: false,
        }
    }
}

/// Complete mutable game state, exclusively owned by the loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the pipe RNG was created with
    pub seed: u64,
    pub mode: GameMode,
    pub bird: Bird,
    /// Oldest (leftmost) pipe at the front
    pub pipes: VecDeque<Pipe>,
    pub score: u32,
    /// Horizontal scroll offset of the ground strip
    pub ground_x: f32,
    /// Frames advanced while playing
    pub frames: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game in `Start` mode
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            mode: GameMode::Start,
            bird: Bird::new(tuning.bird_start_y),
            pipes: VecDeque::new(),
            score: 0,
            ground_x: 0.0,
            frames: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset for a new run. The RNG keeps advancing so runs differ.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.bird = Bird::new(tuning.bird_start_y);
        self.pipes.clear();
        self.score = 0;
        self.frames = 0;
    }

    /// Whether pipes are strictly ascending by x
    pub fn pipes_ordered(&self) -> bool {
        self.pipes
            .iter()
            .zip(self.pipes.iter().skip(1))
            .all(|(a, b)| a.x < b.x)
    }
}
