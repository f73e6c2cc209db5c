//! Configuration for a mounted world and its update throttle.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{CellStyle, GridStyle, Seed};

/// Default cell edge length in pixels when deriving world dimensions.
fn default_cell_size_hint() -> f32 {
    50.0
}

fn default_min_update_interval_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

/// Top-level configuration for one mounted simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// World width in cells. `None` derives it from the surface width.
    #[serde(default)]
    pub width: Option<usize>,
    /// World height in cells. `None` derives it from the surface height.
    #[serde(default)]
    pub height: Option<usize>,
    /// Target cell size in pixels used when deriving world dimensions.
    #[serde(default = "default_cell_size_hint")]
    pub cell_size_hint: f32,
    /// Generation-0 contents.
    #[serde(default)]
    pub seed: Seed,
    /// Minimum wall-clock interval between generations, in milliseconds.
    #[serde(default = "default_min_update_interval_ms")]
    pub min_update_interval_ms: u64,
    /// Draw gridlines at cell boundaries.
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Include the outermost gridlines along the world boundary.
    #[serde(default = "default_true")]
    pub grid_border: bool,
    /// Gridline stroke parameters.
    #[serde(default)]
    pub grid_style: GridStyle,
    /// Cell fill colors.
    #[serde(default)]
    pub cell_style: CellStyle,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            cell_size_hint: default_cell_size_hint(),
            seed: Seed::default(),
            min_update_interval_ms: default_min_update_interval_ms(),
            show_grid: true,
            grid_border: true,
            grid_style: GridStyle::default(),
            cell_style: CellStyle::default(),
        }
    }
}

impl WorldConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err(ConfigError::InvalidWorldSize);
        }
        if !(self.cell_size_hint > 0.0) {
            return Err(ConfigError::InvalidCellSizeHint(self.cell_size_hint));
        }
        if let Seed::Random { ratio, .. } = &self.seed {
            if !(0.0..=1.0).contains(ratio) {
                return Err(ConfigError::InvalidAliveRatio(*ratio));
            }
        }
        Ok(())
    }

    /// Resolve world dimensions for a surface of the given pixel size.
    ///
    /// Explicit dimensions win; otherwise one cell per `cell_size_hint`
    /// pixels, clamped to at least one cell per axis.
    pub fn resolve_world_size(&self, canvas_width: f32, canvas_height: f32) -> (usize, usize) {
        let derive = |pixels: f32| ((pixels / self.cell_size_hint).floor() as usize).max(1);
        (
            self.width.unwrap_or_else(|| derive(canvas_width)),
            self.height.unwrap_or_else(|| derive(canvas_height)),
        )
    }

    /// Gate threshold as a [`Duration`].
    #[inline]
    pub fn min_update_interval(&self) -> Duration {
        Duration::from_millis(self.min_update_interval_ms)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("World dimensions must be non-zero")]
    InvalidWorldSize,
    #[error("Cell size hint must be positive, got {0}")]
    InvalidCellSizeHint(f32),
    #[error("Alive ratio {0} is outside [0, 1]")]
    InvalidAliveRatio(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: WorldConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.width, None);
        assert_eq!(config.height, None);
        assert_eq!(config.cell_size_hint, 50.0);
        assert_eq!(config.min_update_interval_ms, 1000);
        assert!(config.show_grid);
        assert!(config.grid_border);
        assert!(matches!(config.seed, Seed::Random { ratio, seed: None } if ratio == 0.3));
        config.validate().unwrap();
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = WorldConfig {
            width: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWorldSize)
        ));
    }

    #[test]
    fn test_bad_cell_size_hint_rejected() {
        for hint in [0.0, -1.0, f32::NAN] {
            let config = WorldConfig {
                cell_size_hint: hint,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidCellSizeHint(_))
            ));
        }
    }

    #[test]
    fn test_out_of_range_ratio_rejected() {
        let config = WorldConfig {
            seed: Seed::Random {
                ratio: 1.5,
                seed: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAliveRatio(_))
        ));
    }

    #[test]
    fn test_resolve_world_size_derived() {
        let config = WorldConfig::default();
        // 800 / 50 = 16 cells across, 600 / 50 = 12 down.
        assert_eq!(config.resolve_world_size(800.0, 600.0), (16, 12));
        // Collapsed surfaces still produce a valid 1x1 world.
        assert_eq!(config.resolve_world_size(0.0, 0.0), (1, 1));
    }

    #[test]
    fn test_resolve_world_size_explicit() {
        let config = WorldConfig {
            width: Some(40),
            height: Some(30),
            ..Default::default()
        };
        assert_eq!(config.resolve_world_size(800.0, 600.0), (40, 30));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = WorldConfig {
            width: Some(12),
            min_update_interval_ms: 250,
            show_grid: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, Some(12));
        assert_eq!(back.min_update_interval_ms, 250);
        assert!(!back.show_grid);
    }
}
