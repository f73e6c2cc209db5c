//! Engine module - Grid state and the generation update rule.

mod world;

pub use world::*;
