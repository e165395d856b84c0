//! Canvas geometry for agent-centred crops.
//!
//! The canvas adds a one-cell border around the grid, so grid cell
//! `(x, y)` lives at canvas `(row y + 1, col x + 1)`. A window of odd
//! side `w` centred on the agent therefore starts at canvas
//! `(y + 1 - w/2, x + 1 - w/2)`; for the reference `w = 3` that is
//! exactly `(y, x)` and always lies inside the canvas.

use gridlet_core::Position;

/// A square crop anchored at its top-left canvas cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropWindow {
    /// Canvas row of the top-left cell (may be negative for large windows).
    pub top: i64,
    /// Canvas column of the top-left cell (may be negative for large windows).
    pub left: i64,
    /// Side length.
    pub side: usize,
}

impl CropWindow {
    /// The window of side `side` centred on grid cell `center`.
    pub fn around(center: Position, side: u32) -> Self {
        let half = (side / 2) as i64;
        Self {
            top: center.y as i64 + 1 - half,
            left: center.x as i64 + 1 - half,
            side: side as usize,
        }
    }

    /// Whether grid cell `pos` is visible through this window.
    pub fn contains_cell(&self, pos: Position) -> bool {
        let row = pos.y as i64 + 1;
        let col = pos.x as i64 + 1;
        let side = self.side as i64;
        row >= self.top && row < self.top + side && col >= self.left && col < self.left + side
    }
}
