//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, bird_hitbox, hits_any_pipe, hits_ground, pipe_rects};
pub use state::{Bird, GameMode, GameState, Pipe};
pub use tick::{TickInput, handle_flap, tick};
