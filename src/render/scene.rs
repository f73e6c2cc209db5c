//! Scene generation: grid geometry and wholesale primitive regeneration.

use crate::engine::World;
use crate::schema::{CellStyle, GridStyle};

use super::{Line, Rect};

/// Pixel geometry of a world mapped onto a canvas.
///
/// Derived from canvas and world dimensions, recomputed whenever either
/// changes; never stored across resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub world_width: usize,
    pub world_height: usize,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CellGeometry {
    pub fn new(
        canvas_width: f32,
        canvas_height: f32,
        world_width: usize,
        world_height: usize,
    ) -> Self {
        Self {
            canvas_width,
            canvas_height,
            world_width,
            world_height,
            cell_width: canvas_width / world_width as f32,
            cell_height: canvas_height / world_height as f32,
        }
    }
}

/// One filled rectangle per cell, colored by alive/dead state.
///
/// The whole group is regenerated every generation; cells are never
/// patched incrementally.
pub fn cell_rects(world: &World, geometry: &CellGeometry, style: &CellStyle) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(world.width() * world.height());
    for y in 0..world.height() {
        for x in 0..world.width() {
            rects.push(Rect {
                x: x as f32 * geometry.cell_width,
                y: y as f32 * geometry.cell_height,
                width: geometry.cell_width,
                height: geometry.cell_height,
                fill: if world.get(x, y) {
                    style.alive
                } else {
                    style.dead
                },
            });
        }
    }
    rects
}

/// Vertical and horizontal gridlines at each cell boundary.
///
/// Boundary indices 0 and `world_width` (resp. `world_height`) are included
/// only when `border` is set; otherwise only interior boundaries are drawn.
/// State-independent: regenerated on resize, not per generation.
pub fn gridlines(geometry: &CellGeometry, style: &GridStyle, border: bool) -> Vec<Line> {
    let margin = if border { 0 } else { 1 };
    let mut lines = Vec::new();
    for i in margin..=geometry.world_width - margin {
        let x = i as f32 * geometry.cell_width;
        lines.push(Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: geometry.canvas_height,
            stroke: style.color,
            width: style.line_width,
            dash: style.line_dash.clone(),
        });
    }
    for j in margin..=geometry.world_height - margin {
        let y = j as f32 * geometry.cell_height;
        lines.push(Line {
            x1: 0.0,
            y1: y,
            x2: geometry.canvas_width,
            y2: y,
            stroke: style.color,
            width: style.line_width,
            dash: style.line_dash.clone(),
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use crate::schema::{Rgba, Seed};

    use super::*;

    #[test]
    fn test_geometry_cell_size() {
        let geometry = CellGeometry::new(800.0, 600.0, 16, 12);
        assert_eq!(geometry.cell_width, 50.0);
        assert_eq!(geometry.cell_height, 50.0);
    }

    #[test]
    fn test_cell_rects_cover_grid() {
        let seed = Seed::Cells {
            cells: vec![vec![true, false], vec![false, true]],
        };
        let world = World::from_seed(&seed, 2, 2).unwrap();
        let geometry = CellGeometry::new(100.0, 80.0, 2, 2);
        let style = CellStyle::default();

        let rects = cell_rects(&world, &geometry, &style);
        assert_eq!(rects.len(), 4);

        // Row-major: (0,0), (1,0), (0,1), (1,1).
        assert_eq!((rects[0].x, rects[0].y), (0.0, 0.0));
        assert_eq!((rects[1].x, rects[1].y), (50.0, 0.0));
        assert_eq!((rects[2].x, rects[2].y), (0.0, 40.0));
        assert_eq!((rects[3].x, rects[3].y), (50.0, 40.0));
        for rect in &rects {
            assert_eq!(rect.width, 50.0);
            assert_eq!(rect.height, 40.0);
        }

        assert_eq!(rects[0].fill, style.alive);
        assert_eq!(rects[1].fill, style.dead);
        assert_eq!(rects[2].fill, style.dead);
        assert_eq!(rects[3].fill, style.alive);
    }

    #[test]
    fn test_gridlines_with_border() {
        let geometry = CellGeometry::new(100.0, 60.0, 4, 3);
        let lines = gridlines(&geometry, &GridStyle::default(), true);
        // 5 vertical + 4 horizontal, outer boundaries included.
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].x1, 0.0);
        assert_eq!(lines[4].x1, 100.0);
        let horizontal = &lines[5..];
        assert_eq!(horizontal[0].y1, 0.0);
        assert_eq!(horizontal[3].y1, 60.0);
    }

    #[test]
    fn test_gridlines_without_border() {
        let geometry = CellGeometry::new(100.0, 60.0, 4, 3);
        let lines = gridlines(&geometry, &GridStyle::default(), false);
        // 3 interior vertical + 2 interior horizontal.
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].x1, 25.0);
        assert_eq!(lines[2].x1, 75.0);
        let horizontal = &lines[3..];
        assert_eq!(horizontal[0].y1, 20.0);
        assert_eq!(horizontal[1].y1, 40.0);
    }

    #[test]
    fn test_gridlines_single_cell_without_border() {
        let geometry = CellGeometry::new(50.0, 50.0, 1, 1);
        assert!(gridlines(&geometry, &GridStyle::default(), false).is_empty());
        assert_eq!(gridlines(&geometry, &GridStyle::default(), true).len(), 4);
    }

    #[test]
    fn test_gridlines_carry_style() {
        let style = GridStyle {
            color: Rgba::opaque(10, 20, 30),
            line_width: 2.0,
            line_dash: vec![4.0, 1.0],
        };
        let geometry = CellGeometry::new(100.0, 100.0, 2, 2);
        for line in gridlines(&geometry, &style, true) {
            assert_eq!(line.stroke, style.color);
            assert_eq!(line.width, 2.0);
            assert_eq!(line.dash, vec![4.0, 1.0]);
        }
    }
}
