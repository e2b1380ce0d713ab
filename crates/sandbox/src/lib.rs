//! Falling sand simulation engine.

pub mod api;
pub mod brush;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod material;
pub mod moves;
pub mod random;
pub mod rules;
pub mod universe;

use cell::Cell;
use color::Color;
use error::SimError;
use material::Material;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use random::RandomSource;

pub use brush::{Brush, Tool};
pub use config::{Settings, SimConfig};
pub use universe::Universe;

/// 2D grid of cells, row-major. Out-of-bounds reads return `None`, writes are no-ops.
#[derive(Clone, Debug)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Returns false if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange two whole cells. No-op unless both are in bounds.
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) {
        if let (Some(i), Some(j)) = (self.index(a.0, a.1), self.index(b.0, b.1)) {
            self.cells.swap(i, j);
        }
    }

    pub fn mark_updated(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].updated = true;
        }
    }

    pub fn reset_updated(&mut self) {
        for cell in &mut self.cells {
            cell.updated = false;
        }
    }

    /// Replace every cell with a fresh Empty one.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::empty());
    }

    /// Non-empty cells in row-major order, for the renderer.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Material, Color)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(move |(i, c)| (i % width, i / width, c.material, c.color))
    }

    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material == material).count()
    }
}

/// Grid plus the state that carries over between ticks.
///
/// Ticks and placements both need `&mut self`, so input can only be applied
/// between ticks.
#[derive(Debug)]
pub struct Simulation<R = ChaCha8Rng> {
    grid: Grid,
    rng: R,
    left_to_right: bool,
    ticks: u64,
}

impl Simulation<ChaCha8Rng> {
    #[must_use]
    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    #[must_use]
    pub fn with_rng(width: usize, height: usize, rng: R) -> Self {
        Self {
            grid: Grid::new(width, height),
            rng,
            left_to_right: true,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Sweep direction used by the most recent tick.
    #[must_use]
    pub fn left_to_right(&self) -> bool {
        self.left_to_right
    }

    /// Advance the simulation by one tick.
    ///
    /// Clears every `updated` marker, flips the horizontal sweep direction,
    /// then scans rows bottom-to-top. Empty cells and cells that already had
    /// their turn this tick are skipped. Returns how many cells moved.
    pub fn tick(&mut self) -> usize {
        self.grid.reset_updated();
        self.left_to_right = !self.left_to_right;
        let w = self.grid.width as i32;
        let h = self.grid.height as i32;
        let mut moved = 0;

        for y in (0..h).rev() {
            let x_range: Box<dyn Iterator<Item = i32>> = if self.left_to_right {
                Box::new(0..w)
            } else {
                Box::new((0..w).rev())
            };
            for x in x_range {
                match self.grid.cell(x, y) {
                    Some(cell) if !cell.is_empty() && !cell.updated => {}
                    _ => continue,
                }
                let mut api = api::SandApi::new(&mut self.grid, &mut self.rng, x, y);
                if moves::attempt_move(&mut api) {
                    moved += 1;
                }
            }
        }

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, moved, "tick complete");
        moved
    }

    /// Put a freshly sampled cell of `material` at `(x, y)`, whatever was
    /// there. Interaction rules do not apply to placement.
    ///
    /// # Errors
    ///
    /// [`SimError::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn place(&mut self, material: Material, x: i32, y: i32) -> Result<(), SimError> {
        if !self.grid.in_bounds(x, y) {
            return Err(SimError::OutOfBounds { x, y });
        }
        let cell = Cell::new(material, &mut self.rng);
        self.grid.set(x, y, cell);
        Ok(())
    }

    /// # Errors
    ///
    /// [`SimError::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn erase(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        self.place(Material::Empty, x, y)
    }

    pub fn clear_all(&mut self) {
        self.grid.clear();
        tracing::debug!(width = self.grid.width, height = self.grid.height, "grid cleared");
    }
}
