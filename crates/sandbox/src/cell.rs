//! Grid cell: material, movement flags, per-tick marker, colour sample.

use std::fmt;

use crate::color::Color;
use crate::material::{Aggregate, Material, Moves};
use crate::random::RandomSource;

/// Cells are never mutated into another material. Placement and erase
/// construct a fresh cell; movement swaps whole cells.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub material: Material,
    pub moves: Moves,
    /// Set once the cell has had its turn in the current tick.
    pub updated: bool,
    pub color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl Cell {
    /// New cell with a jittered colour sample drawn from `rng`.
    #[must_use]
    pub fn new(material: Material, rng: &mut impl RandomSource) -> Self {
        Self {
            material,
            moves: material.moves(),
            updated: false,
            color: material.base_color().jittered(rng),
        }
    }

    /// New cell with the catalog's base colour, no randomness drawn.
    #[must_use]
    pub fn plain(material: Material) -> Self {
        Self {
            material,
            moves: material.moves(),
            updated: false,
            color: material.base_color(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::plain(Material::Empty)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.material == Material::Empty
    }

    #[must_use]
    pub fn aggregate(&self) -> Aggregate {
        self.material.aggregate()
    }

    #[must_use]
    pub fn density(&self) -> u8 {
        self.material.density()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use proptest::prelude::*;

    #[test]
    fn cell_constructors() {
        let empty = Cell::empty();
        assert_eq!(empty.material, Material::Empty);
        assert!(empty.moves.is_empty());
        assert!(!empty.updated);
        assert!(empty.is_empty());

        let stone = Cell::plain(Material::Stone);
        assert_eq!(stone.material, Material::Stone);
        assert_eq!(stone.color, Material::Stone.base_color());
    }

    #[test]
    fn cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::empty());
    }

    #[test]
    fn cell_display() {
        assert_eq!(format!("{}", Cell::plain(Material::Sand)), "sand");
        assert_eq!(format!("{}", Cell::empty()), "empty");
    }

    #[test]
    fn new_cell_takes_flags_from_catalog() {
        let mut rng = ScriptedRandom::constant(0.5);
        let water = Cell::new(Material::Water, &mut rng);
        assert_eq!(water.moves, Material::Water.moves());
        assert_eq!(water.aggregate(), Aggregate::Liquid);
        assert_eq!(water.density(), 3);
        assert!(!water.updated);
    }

    #[test]
    fn empty_cell_draws_no_randomness() {
        let mut rng = ScriptedRandom::constant(0.3);
        let cell = Cell::new(Material::Empty, &mut rng);
        assert_eq!(cell, Cell::empty());
        assert_eq!(rng.draws(), 0);
    }

    proptest! {
        #[test]
        fn prop_new_cell_keeps_base_alpha(id in 0u8..6, draw in 0.0f64..1.0) {
            let material = Material::from_u8(id).unwrap();
            let mut rng = ScriptedRandom::constant(draw);
            let cell = Cell::new(material, &mut rng);
            prop_assert_eq!(cell.material, material);
            prop_assert_eq!(cell.color.a, material.base_color().a);
        }
    }
}
