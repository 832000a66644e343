//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Only `Playing` runs physics; the
//! ground strip scrolls in every mode.

use rand::Rng;

use super::collision::{bird_hitbox, hits_any_pipe, hits_ground};
use super::state::{GameMode, GameState, Pipe};
use crate::config::GameConfig;
use crate::consts::SCREEN_WIDTH;

/// Input collected for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap key presses since the previous frame, applied in order
    pub flaps: u32,
}

impl TickInput {
    pub fn flap() -> Self {
        Self { flaps: 1 }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    for _ in 0..input.flaps {
        handle_flap(state, config);
    }

    match state.mode {
        GameMode::Playing => step_playing(state, config),
        GameMode::Start | GameMode::GameOver => {}
    }

    scroll_ground(state, config);
}

/// Apply one flap event according to the current mode
pub fn handle_flap(state: &mut GameState, config: &GameConfig) {
    match state.mode {
        GameMode::Start => {
            state.mode = GameMode::Playing;
            log::info!("Game started");
        }
        GameMode::Playing => {
            state.bird.flap(config.tuning.flap_strength);
        }
        GameMode::GameOver => {
            state.reset(&config.tuning);
            state.mode = GameMode::Playing;
            log::info!("Game restarted");
        }
    }
}

fn step_playing(state: &mut GameState, config: &GameConfig) {
    let t = &config.tuning;
    state.frames += 1;

    state.bird.integrate(t.gravity);

    for pipe in state.pipes.iter_mut() {
        pipe.x -= t.pipe_speed;
    }

    retire_pipe(state, config);
    spawn_pipe(state, config);

    let hitbox = bird_hitbox(state.bird.y, config);
    if hits_any_pipe(&hitbox, &state.pipes, config) || hits_ground(state.bird.y, config) {
        state.mode = GameMode::GameOver;
        log::info!("Game over: score {} after {} frames", state.score, state.frames);
    }

    update_score(state, config);

    log::trace!(
        "frame {}: bird y={:.2} vel={:.2}, {} pipes",
        state.frames,
        state.bird.y,
        state.bird.velocity,
        state.pipes.len()
    );
}

/// Drop the front pipe once it has fully left the screen. At most one per frame.
fn retire_pipe(state: &mut GameState, config: &GameConfig) {
    let width = config.metrics.pipe_top.x;
    if state.pipes.front().is_some_and(|p| p.x < -width) {
        state.pipes.pop_front();
        log::debug!("Retired pipe, {} remaining", state.pipes.len());
    }
}

/// Append a pipe at the right edge when the newest one has scrolled far enough
fn spawn_pipe(state: &mut GameState, config: &GameConfig) {
    let t = &config.tuning;
    let due = state
        .pipes
        .back()
        .is_none_or(|p| p.x < SCREEN_WIDTH - t.pipe_spacing);
    if due {
        let gap_center = state.rng.random_range(t.gap_center_min..=t.gap_center_max);
        state.pipes.push_back(Pipe::new(SCREEN_WIDTH, gap_center));
        log::debug!("Spawned pipe with gap center {}", gap_center);
    }
}

fn update_score(state: &mut GameState, config: &GameConfig) {
    let bird_x = config.tuning.bird_x;
    let half_width = config.metrics.pipe_top.x / 2.0;
    for pipe in state.pipes.iter_mut() {
        if !pipe.scored && bird_x > pipe.x + half_width {
            pipe.scored = true;
            state.score += 1;
            log::debug!("Score: {}", state.score);
        }
    }
}

fn scroll_ground(state: &mut GameState, config: &GameConfig) {
    state.ground_x -= config.tuning.pipe_speed;
    if state.ground_x < -config.metrics.ground.x {
        state.ground_x = 0.0;
    }
}
