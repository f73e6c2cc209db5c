//! Drawable primitives handed to the host surface.

use serde::{Deserialize, Serialize};

use crate::schema::Rgba;

/// Filled rectangle for a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Rgba,
}

/// Stroked gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: Rgba,
    pub width: f32,
    /// Dash pattern in pixels; empty for solid.
    pub dash: Vec<f32>,
}
