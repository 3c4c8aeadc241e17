// neighbors.rs - Live neighbor counting on the torus

use crate::bits::BitBuffer;
use crate::index::Torus;
use crate::rules::NEIGHBOR_OFFSETS;

/// Live cells among the 8 wrapped neighbors of in-range `(x, y)` in `cells`.
#[inline]
pub fn count_live_neighbors(torus: &Torus, cells: &BitBuffer, x: usize, y: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dx, dy)| cells.get(torus.offset_index(x, y, dx, dy)) as u8)
        .sum()
}
