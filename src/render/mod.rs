//! Render module - Primitive types and scene generation for the host
//! surface.

mod primitives;
mod scene;

pub use primitives::*;
pub use scene::*;
