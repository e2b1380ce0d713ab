//! Gases: a random jump of up to `MAX_RISE` rows, then a single step up,
//! then a sideways drift.

use super::{side_order, MAX_RISE};
use crate::api::SandApi;
use crate::random::RandomSource;

pub fn rise<R: RandomSource>(api: &mut SandApi<R>) -> bool {
    let steps = api.rng.pick(1, MAX_RISE);
    let shift = api.rng.pick(-1, 1);
    // Clamped, never rejected.
    let (dx, dy) = api.clamp_offset(shift, -steps);
    if api.try_move(dx, dy) || api.try_move(0, -1) {
        return true;
    }
    let (first, second) = side_order(api);
    api.try_move(first, 0) || api.try_move(second, 0)
}
