//! Frame composition
//!
//! Turns the game state into an ordered list of draw commands. Pure, so the
//! draw order and placement can be tested without a GPU.

use glam::Vec2;

use crate::assets::SpriteKind;
use crate::config::{GameConfig, Tuning};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::vertex::colors;
use crate::sim::collision::{bottom_pipe_y, top_pipe_y};
use crate::sim::{GameMode, GameState};

/// One drawing operation, executed in order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Sprite with its unrotated top-left corner at `pos`, rotated about its
    /// center by `rotation` degrees counter-clockwise
    Sprite {
        kind: SpriteKind,
        pos: Vec2,
        rotation: f32,
    },
    /// Text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        color: [f32; 4],
    },
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    fn sprite(&mut self, kind: SpriteKind, pos: Vec2) {
        self.rotated_sprite(kind, pos, 0.0);
    }

    fn rotated_sprite(&mut self, kind: SpriteKind, pos: Vec2, rotation: f32) {
        self.commands.push(DrawCommand::Sprite {
            kind,
            pos,
            rotation,
        });
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos: Vec2::new(x, y),
            color,
        });
    }
}

/// Bird tilt in degrees: nose up while climbing, nose down while falling
pub fn bird_rotation(velocity: f32, tuning: &Tuning) -> f32 {
    (-velocity * tuning.rotation_scale).clamp(tuning.rotation_min, tuning.rotation_max)
}

/// Compose the full frame for the current state
pub fn compose(state: &GameState, config: &GameConfig) -> Scene {
    let t = &config.tuning;
    let m = &config.metrics;
    let mut scene = Scene::default();

    scene.sprite(SpriteKind::Background, Vec2::ZERO);

    for pipe in &state.pipes {
        scene.sprite(SpriteKind::PipeTop, Vec2::new(pipe.x, top_pipe_y(pipe, config)));
        scene.sprite(
            SpriteKind::PipeBottom,
            Vec2::new(pipe.x, bottom_pipe_y(pipe, config)),
        );
    }

    // Rotation pivots on the sprite center, halves rounded down
    let center = Vec2::new(
        t.bird_x + (m.bird.x / 2.0).floor(),
        state.bird.y + (m.bird.y / 2.0).floor(),
    );
    scene.rotated_sprite(
        SpriteKind::Bird,
        center - m.bird / 2.0,
        bird_rotation(state.bird.velocity, t),
    );

    // Two copies tile seamlessly while the offset loops
    scene.sprite(SpriteKind::Ground, Vec2::new(state.ground_x, t.ground_y));
    scene.sprite(
        SpriteKind::Ground,
        Vec2::new(state.ground_x + m.ground.x, t.ground_y),
    );

    let mid_x = SCREEN_WIDTH / 2.0;
    let mid_y = SCREEN_HEIGHT / 2.0;
    scene.text(format!("Score: {}", state.score), mid_x, 50.0, colors::WHITE);

    match state.mode {
        GameMode::Start => {
            scene.text("Press Space to Start", mid_x - 100.0, mid_y, colors::WHITE);
        }
        GameMode::Playing => {}
        GameMode::GameOver => {
            scene.text("Game Over", mid_x - 50.0, mid_y - 50.0, colors::RED);
            scene.text(
                format!("Score: {}", state.score),
                mid_x - 50.0,
                mid_y,
                colors::WHITE,
            );
            scene.text("Press Space to Restart", mid_x - 100.0, mid_y + 50.0, colors::WHITE);
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bird, Pipe};

    fn sprite_kinds(scene: &Scene) -> Vec<SpriteKind> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { kind, .. } => Some(*kind),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    fn texts(scene: &Scene) -> Vec<&str> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Sprite { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_rotation_clamp() {
        let t = Tuning::default();
        assert_eq!(bird_rotation(0.0, &t), 0.0);
        assert_eq!(bird_rotation(-6.5, &t), 19.5);
        // Climbing fast caps at +30, falling fast caps at -90
        assert_eq!(bird_rotation(-20.0, &t), 30.0);
        assert_eq!(bird_rotation(5.0, &t), -15.0);
        assert_eq!(bird_rotation(40.0, &t), -90.0);
    }

    #[test]
    fn test_draw_order() {
        let config = GameConfig::default();
        let mut state = GameState::new(1, &config.tuning);
        state.mode = GameMode::Playing;
        state.pipes.push_back(Pipe::new(100.0, 200));
        state.pipes.push_back(Pipe::new(285.0, 300));

        let scene = compose(&state, &config);
        assert_eq!(
            sprite_kinds(&scene),
            vec![
                SpriteKind::Background,
                SpriteKind::PipeTop,
                SpriteKind::PipeBottom,
                SpriteKind::PipeTop,
                SpriteKind::PipeBottom,
                SpriteKind::Bird,
                SpriteKind::Ground,
                SpriteKind::Ground,
            ]
        );
        // Text comes last
        assert!(matches!(scene.commands.last(), Some(DrawCommand::Text { .. })));
        assert_eq!(texts(&scene), vec!["Score: 0"]);
    }

    #[test]
    fn test_pipe_positions() {
        let config = GameConfig::default();
        let mut state = GameState::new(1, &config.tuning);
        state.pipes.push_back(Pipe::new(120.0, 250));

        let scene = compose(&state, &config);
        assert_eq!(
            scene.commands[1],
            DrawCommand::Sprite {
                kind: SpriteKind::PipeTop,
                pos: Vec2::new(120.0, 250.0 - 65.0 - 320.0),
                rotation: 0.0,
            }
        );
        assert_eq!(
            scene.commands[2],
            DrawCommand::Sprite {
                kind: SpriteKind::PipeBottom,
                pos: Vec2::new(120.0, 315.0),
                rotation: 0.0,
            }
        );
    }

    #[test]
    fn test_bird_and_ground_placement() {
        let config = GameConfig::default();
        let mut state = GameState::new(1, &config.tuning);
        state.bird = Bird {
            y: 300.0,
            velocity: 2.0,
        };
        state.ground_x = -90.0;

        let scene = compose(&state, &config);
        let bird = scene
            .commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Sprite { kind: SpriteKind::Bird, .. }))
            .unwrap();
        assert_eq!(
            *bird,
            DrawCommand::Sprite {
                kind: SpriteKind::Bird,
                pos: Vec2::new(50.0, 300.0),
                rotation: -6.0,
            }
        );

        let grounds: Vec<Vec2> = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite {
                    kind: SpriteKind::Ground,
                    pos,
                    ..
                } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(grounds, vec![Vec2::new(-90.0, 450.0), Vec2::new(246.0, 450.0)]);
    }

    #[test]
    fn test_overlays_per_mode() {
        let config = GameConfig::default();
        let mut state = GameState::new(1, &config.tuning);

        let scene = compose(&state, &config);
        assert_eq!(texts(&scene), vec!["Score: 0", "Press Space to Start"]);

        state.mode = GameMode::GameOver;
        state.score = 7;
        let scene = compose(&state, &config);
        assert_eq!(
            texts(&scene),
            vec!["Score: 7", "Game Over", "Score: 7", "Press Space to Restart"]
        );
        let game_over = scene
            .commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text == "Game Over"))
            .unwrap();
        assert_eq!(
            *game_over,
            DrawCommand::Text {
                text: "Game Over".to_string(),
                pos: Vec2::new(94.0, 206.0),
                color: colors::RED,
            }
        );
    }
}
