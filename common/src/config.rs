use crate::connect_four::{DEFAULT_COLS, DEFAULT_ROWS, MAX_BOARD_SIDE};
use crate::session::{PacingConfig, Palette};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_CELL_PX: u32 = 512;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board of {rows}x{cols} is outside the supported range 1..={max}")]
    BoardSize { rows: usize, cols: usize, max: usize },
    #[error("Cell size of {0}px is outside the supported range 1..={max}", max = MAX_CELL_PX)]
    CellSize(u32),
    #[error("Palette color for {0} is empty")]
    EmptyColor(&'static str),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    // Intrinsic canvas pixels per cell
    pub cell_px: u32,
    pub pacing: PacingConfig,
    pub palette: Palette,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_px: 100,
            pacing: PacingConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = 1..=MAX_BOARD_SIDE;
        if !valid.contains(&self.rows) || !valid.contains(&self.cols) {
            return Err(ConfigError::BoardSize {
                rows: self.rows,
                cols: self.cols,
                max: MAX_BOARD_SIDE,
            });
        }
        if !(1..=MAX_CELL_PX).contains(&self.cell_px) {
            return Err(ConfigError::CellSize(self.cell_px));
        }
        let colors = [
            ("human", &self.palette.human),
            ("automated", &self.palette.automated),
            ("legal", &self.palette.legal),
        ];
        for (name, color) in colors {
            if color.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyColor(name));
            }
        }
        Ok(())
    }

    pub fn canvas_width(&self) -> u32 {
        (self.cols as u32).saturating_mul(self.cell_px)
    }

    pub fn canvas_height(&self) -> u32 {
        (self.rows as u32).saturating_mul(self.cell_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Color;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.canvas_width(), 700);
        assert_eq!(config.canvas_height(), 600);
    }

    #[test]
    fn test_canvas_size_saturates() {
        let mut config = SessionConfig::default();
        config.cell_px = u32::MAX;
        assert_eq!(config.canvas_width(), u32::MAX);
        assert_eq!(config.canvas_height(), u32::MAX);
        config.cell_px = MAX_CELL_PX;
        config.rows = 16;
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.canvas_height(), 16 * MAX_CELL_PX);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str("{\"rows\": 5, \"pacing\": {\"spread_ms\": 0}}").unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.pacing.base_ms, 1000);
        assert_eq!(config.pacing.spread_ms, 0);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = SessionConfig::default();
        config.cols = 0;
        assert!(matches!(config.validate(), Err(ConfigError::BoardSize { cols: 0, .. })));

        let mut config = SessionConfig::default();
        config.cell_px = 0;
        assert_eq!(config.validate(), Err(ConfigError::CellSize(0)));

        let mut config = SessionConfig::default();
        config.cell_px = u32::MAX;
        assert_eq!(config.validate(), Err(ConfigError::CellSize(u32::MAX)));

        let mut config = SessionConfig::default();
        config.palette.legal = Color::from(" ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyColor("legal")));
    }
}
