//! Diagonally down, both sides in coin order.

use super::side_order;
use crate::api::SandApi;
use crate::random::RandomSource;

pub fn slide<R: RandomSource>(api: &mut SandApi<R>) -> bool {
    if api.on_bottom_row() {
        return false;
    }
    let (first, second) = side_order(api);
    api.try_move(first, 1) || api.try_move(second, 1)
}
