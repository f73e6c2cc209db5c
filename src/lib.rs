//! Conway's Game of Life engine with a render-clock throttled scheduler.
//!
//! The crate owns the simulation and the drawable-primitive generation;
//! the physical drawing surface stays on the host's side of the
//! [`Surface`] trait. A host mounts a [`Session`], forwards its per-frame
//! notifications to [`Session::frame`], and the session advances the world
//! at most once per configured minimum interval, swapping a freshly
//! generated set of cell rectangles into the surface each generation.
//!
//! # Architecture
//!
//! The crate is split into four modules:
//!
//! - `schema`: configuration, seeding, and style types
//! - `engine`: the grid state and update rule
//! - `render`: primitive types and scene generation
//! - `runtime`: the update gate and session lifecycle
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Instant;
//!
//! use life_grid::render::{Line, Rect};
//! use life_grid::{Session, Surface, WorldConfig};
//!
//! struct NullSurface;
//!
//! impl Surface for NullSurface {
//!     fn size(&self) -> (f32, f32) {
//!         (800.0, 600.0)
//!     }
//!     fn replace_cells(&mut self, _cells: Vec<Rect>) {}
//!     fn set_gridlines(&mut self, _lines: Vec<Line>) {}
//!     fn clear(&mut self) {}
//!     fn teardown(&mut self) {}
//! }
//!
//! let mut session = Session::mount(NullSurface, WorldConfig::default(), Instant::now())?;
//!
//! // Host frame loop: one call per rendered frame.
//! session.frame(Instant::now());
//!
//! // Unmount: no frame can observe the torn-down surface.
//! session.dispose();
//! # Ok::<(), life_grid::SessionError>(())
//! ```

pub mod engine;
pub mod render;
pub mod runtime;
pub mod schema;

// Re-export commonly used types
pub use engine::{World, WorldStats};
pub use runtime::{Session, SessionError, Surface, UpdateGate};
pub use schema::{CellStyle, GridStyle, Seed, WorldConfig};
