//! Sprite sheet position
//!
//! Sheets are 49 cells wide and tall, so a cell's CSS background offset is
//! `coordinate * 100 / 48` percent.

/// Divisor mapping a sheet cell coordinate to a percentage offset
pub const SHEET_GRID_DIVISOR: u32 = 48;

/// Background-size of a sheet relative to one emoji cell, in percent
pub const SHEET_BACKGROUND_SIZE: u32 = (SHEET_GRID_DIVISOR + 1) * 100;

/// Percentage offsets of one emoji inside a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpritePosition {
    pub x: f64,
    pub y: f64,
}

impl SpritePosition {
    pub fn from_sheet(sheet_x: u32, sheet_y: u32) -> Self {
        Self {
            x: percent(sheet_x),
            y: percent(sheet_y),
        }
    }

    /// CSS `background-position` value
    pub fn css_value(&self) -> String {
        format!("{}% {}%", self.x, self.y)
    }
}

/// Offset of a sheet coordinate in percent
pub fn percent(coordinate: u32) -> f64 {
    f64::from(coordinate) * 100.0 / f64::from(SHEET_GRID_DIVISOR)
}
