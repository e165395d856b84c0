//! Square grid geometry.

use crate::error::SpaceError;
use gridlet_core::{Action, Position};

/// A `size x size` square grid, 0-indexed and inclusive of `size - 1`
/// on both axes.
///
/// Canonical cell ordering is x-major: `(0,0), (0,1), ..., (0,size-1),
/// (1,0), ...`. Placement draws index into this ordering, so it is part
/// of the reproducibility contract for a given seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGrid {
    size: u32,
}

impl SquareGrid {
    /// Maximum side length: coordinates use `i32`, and the cell count
    /// must fit comfortably in `usize` on 32-bit targets.
    pub const MAX_SIZE: u32 = 1 << 15;

    /// Create a new grid with `size * size` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `size` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlet_space::SquareGrid;
    ///
    /// let grid = SquareGrid::new(5).unwrap();
    /// assert_eq!(grid.cell_count(), 25);
    /// assert!(SquareGrid::new(0).is_err());
    /// ```
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether `pos` lies inside `[0, size) x [0, size)`.
    pub fn contains(&self, pos: Position) -> bool {
        let n = self.size as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// Index of `pos` in the canonical ordering, or `None` if out of bounds.
    pub fn canonical_rank(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.x as usize) * (self.size as usize) + (pos.y as usize))
    }

    /// Every cell in canonical (x-major) order.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.size as i32;
        (0..n).flat_map(move |x| (0..n).map(move |y| Position::new(x, y)))
    }

    /// The cell one step from `pos` in the direction of `action`.
    ///
    /// Returns `None` when the step would leave the grid; the caller
    /// decides what a blocked step means.
    pub fn translate(&self, pos: Position, action: Action) -> Option<Position> {
        let (dx, dy) = action.offset();
        let target = pos.offset(dx, dy);
        self.contains(target).then_some(target)
    }
}
