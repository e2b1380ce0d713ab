//! Relative-offset API for movement functions.

use crate::cell::Cell;
use crate::random::RandomSource;
use crate::rules;
use crate::Grid;

/// View of the grid centred on the cell being updated.
/// Out-of-bounds reads return `None`, and such targets are never admissible.
#[derive(Debug)]
pub struct SandApi<'a, R> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut R,
    pub x: i32,
    pub y: i32,
}

impl<'a, R: RandomSource> SandApi<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R, x: i32, y: i32) -> Self {
        Self { grid, rng, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Cell> {
        self.grid.cell(self.x + dx, self.y + dy).copied()
    }

    #[must_use]
    pub fn on_bottom_row(&self) -> bool {
        self.y >= self.grid.height as i32 - 1
    }

    /// Offset that lands inside the grid, with each axis clamped separately.
    #[must_use]
    pub fn clamp_offset(&self, dx: i32, dy: i32) -> (i32, i32) {
        let x = (self.x + dx).clamp(0, self.grid.width as i32 - 1);
        let y = (self.y + dy).clamp(0, self.grid.height as i32 - 1);
        (x - self.x, y - self.y)
    }

    /// Whether this cell may take the position at the offset.
    pub fn can_capture(&mut self, dx: i32, dy: i32) -> bool {
        rules::can_capture(
            &*self.grid,
            (self.x, self.y),
            (self.x + dx, self.y + dy),
            &mut *self.rng,
        )
    }

    /// Swap with the cell at the offset if admissible. The mover is marked
    /// updated in its new position.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if (dx, dy) == (0, 0) || !self.can_capture(dx, dy) {
            return false;
        }
        let (tx, ty) = (self.x + dx, self.y + dy);
        self.grid.swap((self.x, self.y), (tx, ty));
        self.grid.mark_updated(tx, ty);
        self.x = tx;
        self.y = ty;
        true
    }

    /// Close the cell's turn for this tick without moving.
    pub fn finish(&mut self) {
        self.grid.mark_updated(self.x, self.y);
    }
}
