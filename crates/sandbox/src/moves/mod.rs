//! Per-cell movement, tried in capability order once per tick.
//!
//! Order: rise (gases), fall, slide diagonally down, spread sideways. The
//! first branch that succeeds ends the cell's turn. A cell that cannot move
//! is still marked updated so it gets exactly one attempt per tick.

mod fall;
mod rise;
mod slide;
mod spread;

use crate::api::SandApi;
use crate::material::Moves;
use crate::random::RandomSource;

/// Furthest a gas may rise in a single tick.
pub const MAX_RISE: i32 = 3;

/// Give the cell under `api` its turn. Returns true if it changed position.
pub fn attempt_move<R: RandomSource>(api: &mut SandApi<R>) -> bool {
    let Some(me) = api.get(0, 0) else {
        return false;
    };
    if me.updated {
        return false;
    }
    let moves = me.moves;
    let moved = (moves.contains(Moves::UP) && rise::rise(api))
        || (moves.contains(Moves::DOWN) && fall::fall(api))
        || (moves.contains(Moves::DOWN_SIDES) && slide::slide(api))
        || (moves.contains(Moves::SIDES) && spread::spread(api));
    if !moved {
        api.finish();
    }
    moved
}

/// Pick an ordered pair of horizontal directions with a fair coin.
fn side_order<R: RandomSource>(api: &mut SandApi<R>) -> (i32, i32) {
    if api.rng.coin() {
        (-1, 1)
    } else {
        (1, -1)
    }
}
