//! Straight down.

use crate::api::SandApi;
use crate::random::RandomSource;

pub fn fall<R: RandomSource>(api: &mut SandApi<R>) -> bool {
    !api.on_bottom_row() && api.try_move(0, 1)
}
