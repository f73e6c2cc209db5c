//! World state and the next-generation rule.

use serde::{Deserialize, Serialize};

use crate::schema::{Seed, SeedError};

/// Offsets of the 8 grid-adjacent neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size boolean cell matrix with a generation counter.
///
/// Cells are stored flat and row-major: index = y * width + x. Dimensions
/// are fixed for the world's lifetime; a surface resize constructs a fresh
/// world rather than mutating this one.
///
/// The world has no wraparound: neighbor offsets falling outside the matrix
/// are excluded, so border cells see at most 5 neighbors and corners at
/// most 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
}

impl World {
    /// Build a world from a seed.
    ///
    /// Fails when an explicit seed matrix disagrees with the requested
    /// dimensions. Both dimensions must be at least 1; the config layer
    /// enforces this before construction.
    pub fn from_seed(seed: &Seed, width: usize, height: usize) -> Result<Self, SeedError> {
        let cells = seed.generate(width, height)?;
        Ok(Self {
            cells,
            width,
            height,
            generation: 0,
        })
    }

    /// All-dead world.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
            generation: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of applications of the update rule since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flat row-major cell matrix.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.idx(x, y);
        self.cells[idx] = alive;
    }

    /// Count alive cells among the 8 neighbors of (x, y).
    ///
    /// Offsets landing outside the world are excluded; no wraparound.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if nx >= self.width || ny >= self.height {
                continue;
            }
            if self.cells[ny * self.width + nx] {
                count += 1;
            }
        }
        count
    }

    /// Advance one generation.
    ///
    /// The next matrix is evaluated entirely against the pre-update matrix
    /// (no read-after-write within a generation), then swapped in whole.
    /// The generation counter advances by exactly 1. Deterministic given
    /// the current matrix.
    pub fn update(&mut self) {
        let mut next = vec![false; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.neighbor_count(x, y);
                next[y * self.width + x] = if self.cells[y * self.width + x] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
            }
        }
        self.cells = next;
        self.generation += 1;
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Summary statistics for monitoring a running world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldStats {
    pub generation: u64,
    pub population: usize,
    /// Alive fraction of the whole matrix.
    pub density: f32,
}

impl WorldStats {
    pub fn from_world(world: &World) -> Self {
        let population = world.population();
        let total = (world.width() * world.height()).max(1);
        Self {
            generation: world.generation(),
            population,
            density: population as f32 / total as f32,
        }
    }
}
