//! Schema module - Configuration, seeding, and style types for Life worlds.

mod config;
mod seed;
mod style;

pub use config::*;
pub use seed::*;
pub use style::*;
