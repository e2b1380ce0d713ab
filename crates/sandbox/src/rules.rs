//! Interaction rules: may a mover take over a target cell's position?
//!
//! The decision depends only on the two materials' aggregate states and
//! densities. Randomness is consulted solely when a solid or liquid meets a
//! liquid of equal density, which models suspension.

use crate::material::{Aggregate, Material};
use crate::random::RandomSource;
use crate::Grid;

/// Chance that an equal-density solid or liquid swaps into a liquid.
pub const SUSPENSION_CHANCE: f64 = 0.1;

/// Admissibility of `mover` occupying `target`'s cell.
pub fn admits(mover: Material, target: Material, rng: &mut impl RandomSource) -> bool {
    if target == Material::Empty {
        return true;
    }
    let (d1, d2) = (mover.density(), target.density());
    match (mover.aggregate(), target.aggregate()) {
        (Aggregate::Solid, Aggregate::Solid) => false,
        (Aggregate::Solid | Aggregate::Liquid, Aggregate::Liquid) => {
            d1 > d2 || (d1 == d2 && rng.chance(SUSPENSION_CHANCE))
        }
        (Aggregate::Liquid, Aggregate::Solid) | (Aggregate::Gaseous, Aggregate::Gaseous) => d1 > d2,
        (Aggregate::Solid | Aggregate::Liquid, Aggregate::Gaseous) => true,
        (Aggregate::Gaseous, Aggregate::Solid | Aggregate::Liquid) => false,
    }
}

/// Grid-level check for the cell at `from` moving into `to`.
/// Targets outside the grid are never admissible.
pub fn can_capture(
    grid: &Grid,
    from: (i32, i32),
    to: (i32, i32),
    rng: &mut impl RandomSource,
) -> bool {
    let (Some(mover), Some(target)) = (grid.cell(from.0, from.1), grid.cell(to.0, to.1)) else {
        return false;
    };
    admits(mover.material, target.material, rng)
}
