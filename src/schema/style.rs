//! Color and stroke parameters for the grid renderer.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1].
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS `rgba(...)` form, for hosts that consume stringly-typed colors.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

fn default_grid_color() -> Rgba {
    Rgba::new(64, 0, 0, 0.3)
}

fn default_grid_line_width() -> f32 {
    1.0
}

fn default_grid_line_dash() -> Vec<f32> {
    vec![2.0, 2.0]
}

/// Gridline stroke parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    #[serde(default = "default_grid_color")]
    pub color: Rgba,
    #[serde(default = "default_grid_line_width")]
    pub line_width: f32,
    /// Dash pattern in pixels; empty for solid lines.
    #[serde(default = "default_grid_line_dash")]
    pub line_dash: Vec<f32>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: default_grid_color(),
            line_width: default_grid_line_width(),
            line_dash: default_grid_line_dash(),
        }
    }
}

fn default_alive_color() -> Rgba {
    Rgba::new(224, 0, 96, 0.5)
}

fn default_dead_color() -> Rgba {
    Rgba::opaque(255, 255, 255)
}

/// Cell fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    #[serde(default = "default_alive_color")]
    pub alive: Rgba,
    #[serde(default = "default_dead_color")]
    pub dead: Rgba,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            alive: default_alive_color(),
            dead: default_dead_color(),
        }
    }
}

impl CellStyle {
    /// Randomly tinted alive color (red 192..=255, blue 0..192, half
    /// opacity) over a white dead color, for hosts that want a different
    /// palette on every mount.
    pub fn randomized() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            alive: Rgba::new(255 - rng.gen_range(0..64), 0, rng.gen_range(0..192), 0.5),
            dead: default_dead_color(),
        }
    }
}
