//! Placeholder sprite rasterization.
//!
//! Each sprite is a single filled shape with an inward outline on a
//! transparent square canvas. Coordinates follow the usual inclusive
//! bounding-box convention: a box `[m, m, size - m, size - m]`.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const SPRITE_SIZE: u32 = 310;
pub const OUTLINE_WIDTH: u32 = 4;

pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
pub const OUTLINE_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const ASH_COLOR: [u8; 4] = [0xCC, 0x44, 0x00, 0xFF]; // Dark orange-red
pub const EMBER_COLOR: [u8; 4] = [0xDD, 0x22, 0x00, 0xFF]; // Bright red

pub const ASH_VANGUARD_FILE: &str = "ash_vanguard.png";
pub const EMBER_GUARD_FILE: &str = "ember_guard.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSpec {
    pub size: u32,
    pub margin: u32,
    pub shape: Shape,
    pub fill: [u8; 4],
    pub outline: [u8; 4],
    pub outline_width: u32,
}

impl SpriteSpec {
    /// Large orange-red circle.
    pub fn ash_vanguard() -> Self {
        Self {
            size: SPRITE_SIZE,
            margin: 15,
            shape: Shape::Circle,
            fill: ASH_COLOR,
            outline: OUTLINE_COLOR,
            outline_width: OUTLINE_WIDTH,
        }
    }

    /// Red square.
    pub fn ember_guard() -> Self {
        Self {
            size: SPRITE_SIZE,
            margin: 30,
            shape: Shape::Square,
            fill: EMBER_COLOR,
            outline: OUTLINE_COLOR,
            outline_width: OUTLINE_WIDTH,
        }
    }

    pub fn render(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.size, self.size, Rgba(TRANSPARENT));

        for y in 0..self.size {
            for x in 0..self.size {
                let color = match self.shape {
                    Shape::Circle => self.circle_pixel(x, y),
                    Shape::Square => self.square_pixel(x, y),
                };
                if let Some(color) = color {
                    img.put_pixel(x, y, Rgba(color));
                }
            }
        }

        img
    }

    /// Render and write to `path`. The format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        self.render()
            .save(path)
            .map_err(|e| Error::internal_image(e.to_string(), path.display().to_string()))?;
        log_status!("sprite", "Wrote {}x{} {:?} to {}", self.size, self.size, self.shape, path.display());
        Ok(path.to_path_buf())
    }

    fn circle_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let lo = self.margin as f32;
        let hi = (self.size - self.margin) as f32;
        let center = (lo + hi) / 2.0;
        let radius = (hi - lo) / 2.0;

        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist > radius {
            None
        } else if dist > radius - self.outline_width as f32 {
            Some(self.outline)
        } else {
            Some(self.fill)
        }
    }

    fn square_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let lo = self.margin;
        let hi = self.size - self.margin;
        if x < lo || x > hi || y < lo || y > hi {
            return None;
        }

        let w = self.outline_width;
        let on_border = x < lo + w || x + w > hi || y < lo + w || y + w > hi;
        if on_border {
            Some(self.outline)
        } else {
            Some(self.fill)
        }
    }
}

pub fn generate_ash_vanguard(path: &Path) -> Result<PathBuf> {
    SpriteSpec::ash_vanguard().save(path)
}

pub fn generate_ember_guard(path: &Path) -> Result<PathBuf> {
    SpriteSpec::ember_guard().save(path)
}
