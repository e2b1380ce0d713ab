//! Square brush with probabilistic coverage.

use crate::error::SimError;
use crate::material::Material;
use crate::random::RandomSource;
use crate::Simulation;

pub const MIN_SIZE: u8 = 1;
pub const MAX_SIZE: u8 = 10;
pub const DEFAULT_SIZE: u8 = 5;

/// Pressure in tenths.
const MIN_PRESSURE: u8 = 1;
const MAX_PRESSURE: u8 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tool {
    Place(Material),
    Erase,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    size: u8,
    pressure: u8,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            pressure: MAX_PRESSURE,
        }
    }
}

impl Brush {
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] if `size` is outside `1..=10` or
    /// `pressure` outside `0.1..=1.0`.
    pub fn new(size: u8, pressure: f64) -> Result<Self, SimError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(SimError::InvalidConfig(format!(
                "brush size {size} outside {MIN_SIZE}..={MAX_SIZE}"
            )));
        }
        if !pressure.is_finite() || !(0.1 - 1e-9..=1.0 + 1e-9).contains(&pressure) {
            return Err(SimError::InvalidConfig(format!(
                "brush pressure {pressure} outside 0.1..=1.0"
            )));
        }
        let tenths = ((pressure * 10.0).round() as u8).clamp(MIN_PRESSURE, MAX_PRESSURE);
        Ok(Self {
            size,
            pressure: tenths,
        })
    }

    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn pressure(&self) -> f64 {
        f64::from(self.pressure) / 10.0
    }

    pub fn grow(&mut self) {
        self.size = (self.size + 1).min(MAX_SIZE);
    }

    pub fn shrink(&mut self) {
        self.size = self.size.saturating_sub(1).max(MIN_SIZE);
    }

    pub fn press_harder(&mut self) {
        self.pressure = (self.pressure + 1).min(MAX_PRESSURE);
    }

    pub fn press_lighter(&mut self) {
        self.pressure = self.pressure.saturating_sub(1).max(MIN_PRESSURE);
    }

    /// Apply `tool` to the square of side `2 * (size / 2) + 1` around
    /// `(cx, cy)`. Each in-grid cell is painted with probability `pressure`.
    /// Returns the number of cells painted.
    pub fn paint<R: RandomSource>(
        &self,
        sim: &mut Simulation<R>,
        cx: i32,
        cy: i32,
        tool: Tool,
    ) -> usize {
        let half = i32::from(self.size / 2);
        let pressure = self.pressure();
        let material = match tool {
            Tool::Place(material) => material,
            Tool::Erase => Material::Empty,
        };
        let mut painted = 0;
        for y in cy - half..=cy + half {
            for x in cx - half..=cx + half {
                if !sim.grid().in_bounds(x, y) || !sim.rng_mut().chance(pressure) {
                    continue;
                }
                if sim.place(material, x, y).is_ok() {
                    painted += 1;
                }
            }
        }
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use proptest::prelude::*;

    #[test]
    fn defaults() {
        let brush = Brush::default();
        assert_eq!(brush.size(), 5);
        assert!((brush.pressure() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn size_is_clamped() {
        let mut brush = Brush::new(10, 1.0).unwrap();
        brush.grow();
        assert_eq!(brush.size(), 10);
        let mut brush = Brush::new(1, 1.0).unwrap();
        brush.shrink();
        assert_eq!(brush.size(), 1);
    }

    #[test]
    fn pressure_steps_by_tenths_and_is_clamped() {
        let mut brush = Brush::default();
        for _ in 0..20 {
            brush.press_lighter();
        }
        assert!((brush.pressure() - 0.1).abs() < 1e-12);
        for _ in 0..3 {
            brush.press_harder();
        }
        assert!((brush.pressure() - 0.4).abs() < 1e-12);
        for _ in 0..20 {
            brush.press_harder();
        }
        assert!((brush.pressure() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        assert!(Brush::new(0, 1.0).is_err());
        assert!(Brush::new(11, 1.0).is_err());
        assert!(Brush::new(5, 0.05).is_err());
        assert!(Brush::new(5, 1.5).is_err());
        assert!(Brush::new(5, f64::NAN).is_err());
        assert!(Brush::new(5, 0.1).is_ok());
    }

    #[test]
    fn full_pressure_fills_the_square() {
        let mut sim = Simulation::with_rng(20, 20, ScriptedRandom::constant(0.99));
        let brush = Brush::new(5, 1.0).unwrap();
        assert_eq!(brush.paint(&mut sim, 10, 10, Tool::Place(Material::Sand)), 25);
        for y in 8..=12 {
            for x in 8..=12 {
                assert_eq!(sim.grid().cell(x, y).unwrap().material, Material::Sand);
            }
        }
        assert_eq!(sim.grid().count(Material::Sand), 25);
    }

    #[test]
    fn even_sizes_use_integer_half() {
        let mut sim = Simulation::seeded(20, 20, 9);
        let brush = Brush::new(4, 1.0).unwrap();
        assert_eq!(brush.paint(&mut sim, 10, 10, Tool::Place(Material::Stone)), 25);
    }

    #[test]
    fn square_is_cut_at_grid_edges() {
        let mut sim = Simulation::seeded(10, 10, 9);
        let brush = Brush::new(5, 1.0).unwrap();
        assert_eq!(brush.paint(&mut sim, 0, 0, Tool::Place(Material::Water)), 9);
    }

    #[test]
    fn high_draws_are_skipped_under_light_pressure() {
        // A constant high draw never clears half pressure.
        let mut sim = Simulation::with_rng(10, 10, ScriptedRandom::constant(0.95));
        let brush = Brush::new(3, 0.5).unwrap();
        assert_eq!(brush.paint(&mut sim, 5, 5, Tool::Place(Material::Sand)), 0);
        assert_eq!(sim.grid().count(Material::Sand), 0);
    }

    #[test]
    fn erase_replaces_with_empty() {
        let mut sim = Simulation::seeded(10, 10, 4);
        let brush = Brush::new(3, 1.0).unwrap();
        brush.paint(&mut sim, 5, 5, Tool::Place(Material::Oil));
        assert_eq!(brush.paint(&mut sim, 5, 5, Tool::Erase), 9);
        assert_eq!(sim.grid().count(Material::Empty), 100);
    }

    proptest! {
        #[test]
        fn prop_paint_never_exceeds_square(
            cx in -5i32..25,
            cy in -5i32..25,
            size in 1u8..=10,
            tenths in 1u8..=10,
            seed in any::<u64>(),
        ) {
            let mut sim = Simulation::seeded(20, 20, seed);
            let brush = Brush::new(size, f64::from(tenths) / 10.0).unwrap();
            let side = 2 * usize::from(size / 2) + 1;
            let painted = brush.paint(&mut sim, cx, cy, Tool::Place(Material::Stone));
            prop_assert!(painted <= side * side);
            prop_assert_eq!(sim.grid().count(Material::Stone), painted);
        }
    }
}
