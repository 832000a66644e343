//! Axis-aligned collision geometry
//!
//! Rectangles live in screen space (origin top-left, y down).

use glam::Vec2;

use super::state::Pipe;
use crate::config::GameConfig;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Two-interval overlap on both axes. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Forgiving hitbox: the sprite deflated by the tuning margin.
/// The vertical position is truncated to a whole pixel.
pub fn bird_hitbox(bird_y: f32, config: &GameConfig) -> Rect {
    let t = &config.tuning;
    let bird = config.metrics.bird;
    Rect::new(
        t.bird_x,
        bird_y.trunc(),
        bird.x - t.hitbox_deflate,
        bird.y - t.hitbox_deflate,
    )
}

/// Top edge of the top obstacle; it ends half a gap above the center
pub fn top_pipe_y(pipe: &Pipe, config: &GameConfig) -> f32 {
    pipe.gap_center as f32 - config.tuning.gap_height / 2.0 - config.metrics.pipe_top.y
}

/// Top edge of the bottom obstacle; it starts half a gap below the center
pub fn bottom_pipe_y(pipe: &Pipe, config: &GameConfig) -> f32 {
    pipe.gap_center as f32 + config.tuning.gap_height / 2.0
}

/// Rectangles of the top and bottom obstacle of a pipe pair
pub fn pipe_rects(pipe: &Pipe, config: &GameConfig) -> (Rect, Rect) {
    let m = &config.metrics;
    let top = Rect::new(pipe.x, top_pipe_y(pipe, config), m.pipe_top.x, m.pipe_top.y);
    let bottom = Rect::new(
        pipe.x,
        bottom_pipe_y(pipe, config),
        m.pipe_bottom.x,
        m.pipe_bottom.y,
    );
    (top, bottom)
}

/// Whether the bird has dropped past the ground line
pub fn hits_ground(bird_y: f32, config: &GameConfig) -> bool {
    bird_y > config.tuning.ground_y - config.metrics.bird.y
}

/// Whether the bird hitbox overlaps either obstacle of any pipe
pub fn hits_any_pipe<'a>(
    hitbox: &Rect,
    pipes: impl IntoIterator<Item = &'a Pipe>,
    config: &GameConfig,
) -> bool {
    pipes.into_iter().any(|pipe| {
        let (top, bottom) = pipe_rects(pipe, config);
        hitbox.intersects(&top) || hitbox.intersects(&bottom)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(-5.0, -5.0, 30.0, 30.0)));
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_bird_hitbox_deflated() {
        let config = GameConfig::default();
        let hitbox = bird_hitbox(100.7, &config);
        assert_eq!(hitbox, Rect::new(50.0, 100.0, 29.0, 19.0));
    }

    #[test]
    fn test_pipe_rects() {
        let config = GameConfig::default();
        let pipe = Pipe::new(100.0, 250);
        let (top, bottom) = pipe_rects(&pipe, &config);
        // Top ends at 250 - 65, bottom starts at 250 + 65
        assert_eq!(top, Rect::new(100.0, 250.0 - 65.0 - 320.0, 52.0, 320.0));
        assert_eq!(top.bottom(), 185.0);
        assert_eq!(bottom, Rect::new(100.0, 315.0, 52.0, 320.0));
    }

    #[test]
    fn test_bird_in_gap_misses() {
        let config = GameConfig::default();
        let pipe = Pipe::new(40.0, 250);
        // Hitbox spans y 240..259, gap spans 185..315
        let hitbox = bird_hitbox(240.0, &config);
        assert!(!hits_any_pipe(&hitbox, [&pipe], &config));
    }

    #[test]
    fn test_bird_hits_top_and_bottom() {
        let config = GameConfig::default();
        let pipe = Pipe::new(40.0, 250);
        // Hitbox 170..189 crosses the top obstacle's bottom edge at 185
        assert!(hits_any_pipe(&bird_hitbox(170.0, &config), [&pipe], &config));
        // Hitbox 300..319 crosses the bottom obstacle's top edge at 315
        assert!(hits_any_pipe(&bird_hitbox(300.0, &config), [&pipe], &config));
    }

    #[test]
    fn test_pipe_horizontally_clear() {
        let config = GameConfig::default();
        // Bird hitbox spans x 50..79; pipe spans 79..131
        let pipe = Pipe::new(79.0, 400);
        assert!(!hits_any_pipe(&bird_hitbox(100.0, &config), [&pipe], &config));
        let pipe = Pipe::new(78.0, 400);
        assert!(hits_any_pipe(&bird_hitbox(100.0, &config), [&pipe], &config));
    }

    #[test]
    fn test_hits_ground() {
        let config = GameConfig::default();
        // Ground line for a 24px bird is 426
        assert!(!hits_ground(426.0, &config));
        assert!(hits_ground(426.5, &config));
    }
}
