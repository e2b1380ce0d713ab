//! WASM-facing handle: owns the simulation, the brush and the pixel buffer
//! the renderer reads.
//!
//! Host input is untrusted. Out-of-range coordinates and unknown material
//! ids are ignored here rather than surfaced as errors.

use wasm_bindgen::prelude::*;

use crate::brush::{Brush, Tool};
use crate::config::{check_grid_size, SimConfig};
use crate::error::SimError;
use crate::material::Material;
use crate::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    brush: Brush,
    material: Material,
    tile_size: u32,
    /// RGBA8, one pixel per cell, row-major.
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// Grid of `width × height` cells with default brush and Sand selected.
    /// `seed` comes from the host's entropy source.
    ///
    /// # Errors
    ///
    /// A string naming the size if the grid is empty or too large.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Universe, JsValue> {
        Universe::try_new(width, height, seed).map_err(|e| {
            tracing::warn!(error = %e, "grid size rejected");
            JsValue::from_str(&e.to_string())
        })
    }

    /// Build from a JSON [`SimConfig`]. A seed in the config overrides `seed`.
    ///
    /// # Errors
    ///
    /// The validation error, as a string, if the config is rejected.
    pub fn from_config(json: &str, seed: u64) -> Result<Universe, JsValue> {
        let settings = SimConfig::from_json(json)
            .and_then(|config| config.validate())
            .map_err(|e| {
                tracing::warn!(error = %e, "config rejected");
                JsValue::from_str(&e.to_string())
            })?;
        let mut universe = Universe::try_new(
            settings.grid_width,
            settings.grid_height,
            settings.seed.unwrap_or(seed),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        universe.brush = settings.brush;
        universe.material = settings.material;
        universe.tile_size = settings.tile_size;
        Ok(universe)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.sim.grid().width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.sim.grid().height
    }

    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Advance one tick. Returns how many cells moved.
    pub fn tick(&mut self) -> usize {
        self.sim.tick()
    }

    /// Place `material` (a catalog id) at a grid coordinate.
    pub fn set_cell(&mut self, x: i32, y: i32, material: u8) {
        if let Some(material) = Material::from_u8(material) {
            let _ = self.sim.place(material, x, y);
        }
    }

    pub fn erase(&mut self, x: i32, y: i32) {
        let _ = self.sim.erase(x, y);
    }

    pub fn clear(&mut self) {
        self.sim.clear_all();
    }

    /// Catalog id at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn material_at(&self, x: i32, y: i32) -> Option<u8> {
        self.sim.grid().cell(x, y).map(|c| c.material as u8)
    }

    #[must_use]
    pub fn material(&self) -> u8 {
        self.material as u8
    }

    /// Returns false and keeps the current selection for an unknown id.
    pub fn select_material(&mut self, material: u8) -> bool {
        match Material::from_u8(material) {
            Some(material) => {
                self.material = material;
                tracing::debug!(%material, "material selected");
                true
            }
            None => false,
        }
    }

    /// # Errors
    ///
    /// The unknown name, as a string, if it is not in the catalog.
    pub fn select_material_by_name(&mut self, name: &str) -> Result<(), JsValue> {
        let material = name
            .parse::<Material>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.material = material;
        tracing::debug!(%material, "material selected");
        Ok(())
    }

    #[must_use]
    pub fn brush_size(&self) -> u8 {
        self.brush.size()
    }

    #[must_use]
    pub fn brush_pressure(&self) -> f64 {
        self.brush.pressure()
    }

    pub fn grow_brush(&mut self) {
        self.brush.grow();
    }

    pub fn shrink_brush(&mut self) {
        self.brush.shrink();
    }

    pub fn press_harder(&mut self) {
        self.brush.press_harder();
    }

    pub fn press_lighter(&mut self) {
        self.brush.press_lighter();
    }

    /// Brush stroke centred on a grid coordinate with the selected material,
    /// or erasing. Returns the number of cells painted.
    pub fn paint(&mut self, x: i32, y: i32, erase: bool) -> usize {
        let tool = if erase {
            Tool::Erase
        } else {
            Tool::Place(self.material)
        };
        self.brush.paint(&mut self.sim, x, y, tool)
    }

    /// Same as [`Universe::paint`] with a position in field pixels.
    pub fn paint_at_pixel(&mut self, px: f64, py: f64, erase: bool) -> usize {
        let tile = f64::from(self.tile_size);
        let x = (px / tile).floor() as i32;
        let y = (py / tile).floor() as i32;
        self.paint(x, y, erase)
    }

    /// Refresh the pixel buffer from the grid. Empty cells are transparent.
    pub fn render(&mut self) {
        self.pixels.fill(0);
        let width = self.sim.grid().width;
        for (x, y, _, color) in self.sim.grid().occupied() {
            let i = (y * width + x) * 4;
            self.pixels[i..i + 4].copy_from_slice(&color.to_rgba8());
        }
    }

    #[must_use]
    pub fn pixels_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    #[must_use]
    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

impl Universe {
    /// [`Universe::new`] with the error left as a [`SimError`].
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] if [`check_grid_size`] rejects the grid.
    pub fn try_new(width: usize, height: usize, seed: u64) -> Result<Universe, SimError> {
        check_grid_size(width, height)?;
        tracing::info!(width, height, seed, "universe created");
        Ok(Universe {
            sim: Simulation::seeded(width, height, seed),
            brush: Brush::default(),
            material: Material::Sand,
            tile_size: 1,
            pixels: vec![0; width * height * 4],
        })
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
