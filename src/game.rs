//! Game session: owns the state and turns input events into frames

use crate::assets::SpriteSheet;
use crate::config::GameConfig;
use crate::input::InputEvent;
use crate::renderer::scene::{Scene, compose};
use crate::sim::{GameState, TickInput, tick};

/// Whether the loop should keep running after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// One running game
pub struct Game {
    state: GameState,
    config: GameConfig,
    sprites: SpriteSheet,
}

impl Game {
    /// New game in `Start` mode. The config's metrics should come from `sprites`.
    pub fn new(config: GameConfig, sprites: SpriteSheet, seed: u64) -> Self {
        let state = GameState::new(seed, &config.tuning);
        log::info!("New game with seed {}", state.seed);
        Self {
            state,
            config,
            sprites,
        }
    }

    /// Run one frame with the events gathered since the last one.
    /// A quit anywhere in the batch stops before the simulation advances.
    pub fn frame(&mut self, events: &[InputEvent]) -> Control {
        let mut input = TickInput::default();
        for event in events {
            match event {
                InputEvent::Flap => input.flaps += 1,
                InputEvent::Quit => {
                    log::info!("Quit requested, final score {}", self.state.score);
                    return Control::Quit;
                }
            }
        }

        tick(&mut self.state, &input, &self.config);
        Control::Continue
    }

    /// Draw commands for the current state
    pub fn scene(&self) -> Scene {
        compose(&self.state, &self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }
}
