// history.rs - Detecting when a grid revisits a recent generation

use tracing::info;

use crate::grid::Grid;

/// Generations remembered when looking for repeats.
pub const HISTORY_LEN: usize = 10;

/// Ring of fingerprints of the last [`HISTORY_LEN`] observed generations.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the grid's current generation. Returns `true` when it matches
    /// one of the remembered generations, meaning the grid has settled into a
    /// still life or an oscillator with period up to [`HISTORY_LEN`].
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let fingerprint = grid.fingerprint();
        let remembered = self.count.min(HISTORY_LEN);
        if self.history[..remembered].contains(&fingerprint) {
            info!(generation = grid.generation(), "grid repeats a recent generation");
            return true;
        }
        self.history[self.count % HISTORY_LEN] = fingerprint;
        self.count += 1;
        false
    }

    /// Nothing has been observed since creation or the last reset.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
