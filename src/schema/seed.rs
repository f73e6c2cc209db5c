//! Seed types for populating generation 0 of a world.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

fn default_alive_ratio() -> f32 {
    0.3
}

/// Generation-0 contents for a world.
///
/// The only randomness in the engine lives here; every later generation is
/// a deterministic function of the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seed {
    /// All cells dead.
    Empty,
    /// Each cell independently alive with probability `ratio`.
    Random {
        #[serde(default = "default_alive_ratio")]
        ratio: f32,
        /// RNG seed for reproducible worlds. `None` draws from entropy.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Explicit matrix: height rows of width booleans each.
    Cells { cells: Vec<Vec<bool>> },
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random {
            ratio: default_alive_ratio(),
            seed: None,
        }
    }
}

impl Seed {
    /// Generate a flat row-major matrix for a `width` x `height` world.
    ///
    /// An explicit matrix must match the requested dimensions exactly; it
    /// is never truncated or padded.
    pub fn generate(&self, width: usize, height: usize) -> Result<Vec<bool>, SeedError> {
        match self {
            Seed::Empty => Ok(vec![false; width * height]),
            Seed::Random { ratio, seed } => {
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(*s),
                    None => StdRng::from_entropy(),
                };
                // gen_bool requires a probability in [0, 1].
                let p = f64::from(*ratio).clamp(0.0, 1.0);
                Ok((0..width * height).map(|_| rng.gen_bool(p)).collect())
            }
            Seed::Cells { cells } => {
                if cells.len() != height {
                    return Err(SeedError::RowCountMismatch {
                        rows: cells.len(),
                        height,
                    });
                }
                for (y, row) in cells.iter().enumerate() {
                    if row.len() != width {
                        return Err(SeedError::RowLengthMismatch {
                            row: y,
                            len: row.len(),
                            width,
                        });
                    }
                }
                Ok(cells.iter().flatten().copied().collect())
            }
        }
    }
}

/// Seed matrix validation errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed matrix has {rows} rows, world height is {height}")]
    RowCountMismatch { rows: usize, height: usize },
    #[error("Seed matrix row {row} has {len} cells, world width is {width}")]
    RowLengthMismatch { row: usize, len: usize, width: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_all_dead() {
        let cells = Seed::Empty.generate(4, 3).unwrap();
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|&c| !c));
    }

    #[test]
    fn test_random_seed_reproducible() {
        let seed = Seed::Random {
            ratio: 0.3,
            seed: Some(7),
        };
        let a = seed.generate(16, 16).unwrap();
        let b = seed.generate(16, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_ratio_extremes() {
        let none = Seed::Random {
            ratio: 0.0,
            seed: Some(1),
        };
        assert!(none.generate(8, 8).unwrap().iter().all(|&c| !c));

        let all = Seed::Random {
            ratio: 1.0,
            seed: Some(1),
        };
        assert!(all.generate(8, 8).unwrap().iter().all(|&c| c));
    }

    #[test]
    fn test_explicit_cells_row_major() {
        let seed = Seed::Cells {
            cells: vec![vec![true, false], vec![false, true], vec![true, true]],
        };
        let cells = seed.generate(2, 3).unwrap();
        assert_eq!(cells, vec![true, false, false, true, true, true]);
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        // Declared 3x3, supplied 2 rows.
        let seed = Seed::Cells {
            cells: vec![vec![false; 3], vec![false; 3]],
        };
        assert!(matches!(
            seed.generate(3, 3),
            Err(SeedError::RowCountMismatch { rows: 2, height: 3 })
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let seed = Seed::Cells {
            cells: vec![vec![false; 3], vec![false; 2], vec![false; 3]],
        };
        assert!(matches!(
            seed.generate(3, 3),
            Err(SeedError::RowLengthMismatch {
                row: 1,
                len: 2,
                width: 3
            })
        ));
    }

    #[test]
    fn test_seed_serde_tagged() {
        let json = r#"{"type":"random","ratio":0.5,"seed":42}"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert!(matches!(
            seed,
            Seed::Random {
                ratio,
                seed: Some(42)
            } if ratio == 0.5
        ));

        let json = r#"{"type":"empty"}"#;
        assert!(matches!(
            serde_json::from_str::<Seed>(json).unwrap(),
            Seed::Empty
        ));
    }
}
