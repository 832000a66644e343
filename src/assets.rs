//! Sprite manifest loading
//!
//! Sprites are flat-shaded rectangles described by a JSON manifest. The
//! manifest is read once at startup; any failure is fatal to the caller.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SpriteMetrics;

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "assets/sprites.json";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sprite manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite '{name}' is invalid: {reason}")]
    InvalidSprite { name: &'static str, reason: String },
}

/// The sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Background,
    PipeTop,
    PipeBottom,
    Bird,
    Ground,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 5] = [
        SpriteKind::Background,
        SpriteKind::PipeTop,
        SpriteKind::PipeBottom,
        SpriteKind::Bird,
        SpriteKind::Ground,
    ];

    /// Key of this sprite in the manifest
    pub fn name(&self) -> &'static str {
        match self {
            SpriteKind::Background => "background",
            SpriteKind::PipeTop => "pipe_top",
            SpriteKind::PipeBottom => "pipe_bottom",
            SpriteKind::Bird => "bird",
            SpriteKind::Ground => "ground",
        }
    }
}

/// A single sprite: pixel size plus colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    /// RGBA, each channel in [0, 1]
    pub fill: [f32; 4],
    /// Optional 2px border color
    #[serde(default)]
    pub outline: Option<[f32; 4]>,
}

impl Sprite {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn validate(&self, name: &'static str) -> Result<(), AssetError> {
        if self.width == 0 || self.height == 0 {
            return Err(AssetError::InvalidSprite {
                name,
                reason: format!("dimensions must be non-zero, got {}x{}", self.width, self.height),
            });
        }
        let colors = std::iter::once(&self.fill).chain(self.outline.as_ref());
        for color in colors {
            if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(AssetError::InvalidSprite {
                    name,
                    reason: format!("color channels must lie in [0, 1], got {color:?}"),
                });
            }
        }
        Ok(())
    }
}

/// All sprites, loaded once and read-only thereafter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub background: Sprite,
    pub pipe_top: Sprite,
    pub pipe_bottom: Sprite,
    pub bird: Sprite,
    pub ground: Sprite,
}

impl SpriteSheet {
    /// Load and validate a manifest from disk
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet: SpriteSheet = serde_json::from_str(&json).map_err(|source| AssetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        sheet.validate()?;
        log::info!("Loaded sprite manifest from {}", path.display());
        Ok(sheet)
    }

    pub fn validate(&self) -> Result<(), AssetError> {
        for kind in SpriteKind::ALL {
            self.get(kind).validate(kind.name())?;
        }
        Ok(())
    }

    pub fn get(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::Background => &self.background,
            SpriteKind::PipeTop => &self.pipe_top,
            SpriteKind::PipeBottom => &self.pipe_bottom,
            SpriteKind::Bird => &self.bird,
            SpriteKind::Ground => &self.ground,
        }
    }

    /// Sizes the simulation needs for hitboxes and scrolling
    pub fn metrics(&self) -> SpriteMetrics {
        SpriteMetrics {
            bird: self.bird.size(),
            pipe_top: self.pipe_top.size(),
            pipe_bottom: self.pipe_bottom.size(),
            ground: self.ground.size(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const CLASSIC_JSON: &str = r#"{
        "background": { "width": 288, "height": 512, "fill": [0.31, 0.75, 0.79, 1.0] },
        "pipe_top": { "width": 52, "height": 320, "fill": [0.45, 0.75, 0.18, 1.0], "outline": [0.33, 0.22, 0.28, 1.0] },
        "pipe_bottom": { "width": 52, "height": 320, "fill": [0.45, 0.75, 0.18, 1.0], "outline": [0.33, 0.22, 0.28, 1.0] },
        "bird": { "width": 34, "height": 24, "fill": [0.98, 0.78, 0.18, 1.0], "outline": [0.33, 0.22, 0.28, 1.0] },
        "ground": { "width": 336, "height": 112, "fill": [0.87, 0.84, 0.58, 1.0] }
    }"#;

    pub(crate) fn classic_sheet() -> SpriteSheet {
        serde_json::from_str(CLASSIC_JSON).unwrap()
    }

    #[test]
    fn test_classic_manifest_metrics() {
        let sheet = classic_sheet();
        assert!(sheet.validate().is_ok());
        assert_eq!(sheet.metrics(), SpriteMetrics::CLASSIC);
        assert!(sheet.bird.outline.is_some());
        assert!(sheet.background.outline.is_none());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut sheet = classic_sheet();
        sheet.bird.height = 0;
        let err = sheet.validate().unwrap_err();
        assert!(matches!(err, AssetError::InvalidSprite { name: "bird", .. }));
    }

    #[test]
    fn test_color_out_of_range_rejected() {
        let mut sheet = classic_sheet();
        sheet.ground.outline = Some([1.5, 0.0, 0.0, 1.0]);
        let err = sheet.validate().unwrap_err();
        assert!(matches!(err, AssetError::InvalidSprite { name: "ground", .. }));
    }

    #[test]
    fn test_missing_sprite_is_parse_error() {
        let json = r#"{ "bird": { "width": 34, "height": 24, "fill": [1, 1, 1, 1] } }"#;
        assert!(serde_json::from_str::<SpriteSheet>(json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SpriteSheet::load(Path::new("/nonexistent/sprites.json")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sprites.json"));
    }

    #[test]
    fn test_bundled_manifest_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_MANIFEST);
        let sheet = SpriteSheet::load(&path).unwrap();
        assert_eq!(sheet.metrics(), SpriteMetrics::CLASSIC);
    }
}
