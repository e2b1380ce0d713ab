//! Liquids: one sideways step in a single random direction. The other side
//! is not tried.

use crate::api::SandApi;
use crate::random::RandomSource;

pub fn spread<R: RandomSource>(api: &mut SandApi<R>) -> bool {
    let dx = if api.rng.coin() { -1 } else { 1 };
    api.try_move(dx, 0)
}
