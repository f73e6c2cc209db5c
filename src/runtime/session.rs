//! Session lifecycle: one world, one gate, one host surface.

use std::time::Instant;

use log::debug;

use crate::engine::World;
use crate::render::{CellGeometry, Line, Rect, cell_rects, gridlines};
use crate::schema::{ConfigError, SeedError, WorldConfig};

use super::UpdateGate;

/// Host-owned drawing surface.
///
/// Implementations own the physical pixels; the session only pushes whole
/// primitive groups and never draws incrementally. Failures inside an
/// implementation stay on the host's side of this boundary; the session
/// does not catch or hide them.
pub trait Surface {
    /// Current drawable size in physical pixels.
    fn size(&self) -> (f32, f32);

    /// Replace the full set of cell rectangles in one swap.
    fn replace_cells(&mut self, cells: Vec<Rect>);

    /// Replace the static gridline group.
    fn set_gridlines(&mut self, lines: Vec<Line>);

    /// Drop all primitive groups.
    fn clear(&mut self);

    /// Release graphics resources. Called once, after the last frame.
    fn teardown(&mut self);
}

/// Errors from mounting or rebuilding a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// One mounted simulation: exclusive owner of a world, its geometry, the
/// update gate, and the host surface.
///
/// The host forwards its per-frame notifications to [`Session::frame`] and
/// its size changes to [`Session::resize`]; everything runs to completion
/// synchronously inside those calls. Because `frame` borrows the session
/// mutably and [`Session::dispose`] consumes it, a frame notification can
/// never observe a torn-down surface.
pub struct Session<S: Surface> {
    surface: S,
    config: WorldConfig,
    world: World,
    geometry: CellGeometry,
    gate: UpdateGate,
}

impl<S: Surface> Session<S> {
    /// Validate the config, seed a world sized to the surface, push
    /// generation 0, and arm the gate at `now`.
    pub fn mount(mut surface: S, config: WorldConfig, now: Instant) -> Result<Self, SessionError> {
        config.validate()?;

        let (canvas_width, canvas_height) = surface.size();
        let (world_width, world_height) = config.resolve_world_size(canvas_width, canvas_height);
        let world = World::from_seed(&config.seed, world_width, world_height)?;
        let geometry = CellGeometry::new(canvas_width, canvas_height, world_width, world_height);

        if config.show_grid {
            surface.set_gridlines(gridlines(&geometry, &config.grid_style, config.grid_border));
        }
        surface.replace_cells(cell_rects(&world, &geometry, &config.cell_style));
        debug!(
            "mounted {world_width}x{world_height} world on {canvas_width}x{canvas_height} surface"
        );

        let gate = UpdateGate::new(config.min_update_interval(), now);
        Ok(Self {
            surface,
            config,
            world,
            geometry,
            gate,
        })
    }

    /// Per-frame notification from the host.
    ///
    /// When the gate passes: advance one generation, regenerate the cell
    /// rectangles, and swap them into the surface. Otherwise a no-op.
    /// Returns whether a generation ran.
    pub fn frame(&mut self, now: Instant) -> bool {
        if !self.gate.tick(now) {
            return false;
        }
        self.world.update();
        self.surface.replace_cells(cell_rects(
            &self.world,
            &self.geometry,
            &self.config.cell_style,
        ));
        true
    }

    /// Full reset after a surface size change.
    ///
    /// Reconstructs the world from the configured seed (simulation history
    /// is lost), recomputes geometry, regenerates gridlines and cells, and
    /// re-arms the gate at `now`. Overlapping resizes are impossible
    /// through `&mut self`.
    pub fn resize(&mut self, now: Instant) -> Result<(), SessionError> {
        let (canvas_width, canvas_height) = self.surface.size();
        let (world_width, world_height) =
            self.config.resolve_world_size(canvas_width, canvas_height);

        self.world = World::from_seed(&self.config.seed, world_width, world_height)?;
        self.geometry = CellGeometry::new(canvas_width, canvas_height, world_width, world_height);

        self.surface.clear();
        if self.config.show_grid {
            self.surface.set_gridlines(gridlines(
                &self.geometry,
                &self.config.grid_style,
                self.config.grid_border,
            ));
        }
        self.surface.replace_cells(cell_rects(
            &self.world,
            &self.geometry,
            &self.config.cell_style,
        ));
        self.gate = UpdateGate::new(self.config.min_update_interval(), now);
        debug!(
            "rebuilt {world_width}x{world_height} world after resize to \
             {canvas_width}x{canvas_height}"
        );
        Ok(())
    }

    /// Consume the session and release the surface.
    ///
    /// Taking the session by value guarantees no further `frame` or
    /// `resize` call can reach the surface afterwards.
    pub fn dispose(mut self) {
        self.surface.teardown();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
