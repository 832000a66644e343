//! Shape generation for 2D primitives
//!
//! Everything is tessellated into triangle lists in screen pixels
//! (origin top-left, y down).

use std::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use glam::Vec2;

use super::scene::{DrawCommand, Scene};
use super::vertex::Vertex;
use crate::assets::{Sprite, SpriteSheet};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Width of sprite outlines in pixels
pub const OUTLINE_WIDTH: f32 = 2.0;
/// Font used for the score and overlays
pub const HUD_FONT: &MonoFont<'static> = &FONT_10X20;

/// Two triangles from four corners given clockwise from top-left
fn quad_from_corners(corners: [Vec2; 4], color: [f32; 4], out: &mut Vec<Vertex>) {
    let [tl, tr, br, bl] = corners;
    for p in [tl, tr, bl, bl, tr, br] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Axis-aligned filled rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4], out: &mut Vec<Vertex>) {
    quad_from_corners(
        [
            pos,
            pos + Vec2::new(size.x, 0.0),
            pos + size,
            pos + Vec2::new(0.0, size.y),
        ],
        color,
        out,
    );
}

/// Rotate `offset` counter-clockwise on screen by `degrees`.
/// Screen y points down, so the sine terms flip relative to math convention.
pub fn rotate_ccw(offset: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(
        offset.x * cos + offset.y * sin,
        -offset.x * sin + offset.y * cos,
    )
}

/// Filled rectangle rotated about `pivot`
pub fn rotated_rect(
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    degrees: f32,
    color: [f32; 4],
    out: &mut Vec<Vertex>,
) {
    if degrees == 0.0 {
        rect(pos, size, color, out);
        return;
    }
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
    ]
    .map(|c| pivot + rotate_ccw(c - pivot, degrees));
    quad_from_corners(corners, color, out);
}

/// A sprite: outline color as a full quad, fill inset on top of it
pub fn sprite(sprite: &Sprite, pos: Vec2, rotation: f32, out: &mut Vec<Vertex>) {
    let size = sprite.size();
    let pivot = pos + size / 2.0;
    match sprite.outline {
        Some(outline) if size.x > 2.0 * OUTLINE_WIDTH && size.y > 2.0 * OUTLINE_WIDTH => {
            rotated_rect(pos, size, pivot, rotation, outline, out);
            let inset = Vec2::splat(OUTLINE_WIDTH);
            rotated_rect(pos + inset, size - 2.0 * inset, pivot, rotation, sprite.fill, out);
        }
        _ => rotated_rect(pos, size, pivot, rotation, sprite.fill, out),
    }
}

/// Draw target that turns every lit font pixel into a one-pixel quad
struct PixelQuads<'a> {
    origin: Vec2,
    color: [f32; 4],
    out: &'a mut Vec<Vertex>,
}

impl OriginDimensions for PixelQuads<'_> {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}

impl DrawTarget for PixelQuads<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() {
                let pos = self.origin + Vec2::new(point.x as f32, point.y as f32);
                rect(pos, Vec2::ONE, self.color, self.out);
            }
        }
        Ok(())
    }
}

/// Text in the HUD font with its top-left corner at `pos`
pub fn text(text: &str, pos: Vec2, color: [f32; 4], out: &mut Vec<Vertex>) {
    let style = MonoTextStyle::new(HUD_FONT, BinaryColor::On);
    let mut target = PixelQuads { origin: pos, color, out };
    let drawn = Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut target);
    if let Err(never) = drawn {
        match never {}
    }
}

/// Generate the vertices for a whole scene, in draw order
pub fn tessellate(scene: &Scene, sprites: &SpriteSheet) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.commands.len() * 12);
    for command in &scene.commands {
        match command {
            DrawCommand::Sprite {
                kind,
                pos,
                rotation,
            } => sprite(sprites.get(*kind), *pos, *rotation, &mut vertices),
            DrawCommand::Text {
                text: content,
                pos,
                color,
            } => text(content, *pos, *color, &mut vertices),
        }
    }
    vertices
}
