// grid.rs - Double-buffered bit grid for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::bits::{self, BitBuffer, WORD_BITS, Word};
use crate::config::LifeConfig;
use crate::error::ConfigError;
use crate::index::Torus;
use crate::neighbors::count_live_neighbors;
use crate::rules;

/// Which of the two buffers currently holds the visible generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Front,
    Back,
}

impl Side {
    const fn slot(self) -> usize {
        match self {
            Side::Front => 0,
            Side::Back => 1,
        }
    }

    const fn other(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// A torus of cells stored as two bit buffers.
///
/// Reads and edits always go to the *active* buffer. Stepping writes the
/// whole next generation into the *future* buffer and then flips which one
/// is active, so a half-written generation is never observable.
#[derive(Clone, Debug)]
pub struct Grid {
    torus: Torus,
    buffers: [BitBuffer; 2],
    active: Side,
    generation: u64,
}

impl Grid {
    /// Empty grid sized by `config`.
    pub fn new(config: &LifeConfig) -> Result<Self, ConfigError> {
        let torus = Torus::new(config.width, config.height)?;
        let cells = torus.cell_count();
        debug!(
            width = torus.width(),
            height = torus.height(),
            words = cells.div_ceil(WORD_BITS),
            "allocated grid buffers"
        );
        Ok(Self {
            torus,
            buffers: [BitBuffer::new(cells), BitBuffer::new(cells)],
            active: Side::Front,
            generation: 0,
        })
    }

    pub fn torus(&self) -> Torus {
        self.torus
    }

    pub fn width(&self) -> usize {
        self.torus.width()
    }

    pub fn height(&self) -> usize {
        self.torus.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// See [`Torus::index`].
    pub fn index(&self, x: i64, y: i64) -> usize {
        self.torus.index(x, y)
    }

    /// The buffer holding the current generation.
    pub fn active(&self) -> &BitBuffer {
        &self.buffers[self.active.slot()]
    }

    fn active_mut(&mut self) -> &mut BitBuffer {
        &mut self.buffers[self.active.slot()]
    }

    pub fn is_alive(&self, idx: usize) -> bool {
        self.active().get(idx)
    }

    pub fn is_alive_at(&self, x: i64, y: i64) -> bool {
        self.is_alive(self.index(x, y))
    }

    pub fn set_alive(&mut self, idx: usize) {
        self.active_mut().set_alive(idx);
    }

    pub fn set_dead(&mut self, idx: usize) {
        self.active_mut().set_dead(idx);
    }

    pub fn set_state(&mut self, idx: usize, alive: bool) {
        self.active_mut().set(idx, alive);
    }

    pub fn toggle(&mut self, idx: usize) {
        self.active_mut().toggle(idx);
    }

    /// Live neighbors of `(x, y)` in the current generation.
    pub fn live_neighbors(&self, x: i64, y: i64) -> u8 {
        let (x, y) = self.torus.coords(self.index(x, y));
        count_live_neighbors(&self.torus, self.active(), x, y)
    }

    pub fn population(&self) -> usize {
        self.active().count_ones()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.active().iter_ones().map(|idx| self.torus.coords(idx))
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.active_mut().clear();
        self.generation = 0;
    }

    /// Hash of the current generation's cells.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.active().words().hash(&mut hasher);
        hasher.finish()
    }

    /// Advances one generation on the calling thread.
    pub fn step(&mut self) {
        let torus = self.torus;
        let (active, future) = self.split_for_step();
        advance_words(&torus, active, future.words_mut(), 0);
        self.flip();
    }

    /// Current generation for reading and the scratch buffer for writing.
    pub(crate) fn split_for_step(&mut self) -> (&BitBuffer, &mut BitBuffer) {
        let [front, back] = &mut self.buffers;
        match self.active {
            Side::Front => (&*front, back),
            Side::Back => (&*back, front),
        }
    }

    /// Publishes the future buffer as the new generation.
    pub(crate) fn flip(&mut self) {
        self.active = self.active.other();
        self.generation += 1;
        trace!(generation = self.generation, "generation advanced");
    }
}

/// Computes the next state of every cell covered by `words`, a run of the
/// future buffer starting at word `first_word`, from the `active` buffer.
pub(crate) fn advance_words(torus: &Torus, active: &BitBuffer, words: &mut [Word], first_word: usize) {
    let cells = torus.cell_count();
    let width = torus.width();
    let start = first_word * WORD_BITS;
    if start >= cells {
        return;
    }
    let (mut x, mut y) = torus.coords(start);
    for (offset, word) in words.iter_mut().enumerate() {
        let base = start + offset * WORD_BITS;
        let end = cells.min(base + WORD_BITS);
        for idx in base..end {
            let neighbors = count_live_neighbors(torus, active, x, y);
            let next = rules::next_state(active.get(idx), neighbors);
            *word = bits::blend(*word, bits::mask(idx), next);
            x += 1;
            if x == width {
                x = 0;
                y += 1;
            }
        }
        if end == cells {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize) -> Grid {
        Grid::new(&LifeConfig::new(width, height)).unwrap()
    }

    #[test]
    fn starts_empty_at_generation_zero() {
        let grid = grid(20, 10);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.active().len(), 200);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Grid::new(&LifeConfig::new(0, 5)).is_err());
    }

    #[test]
    fn edits_go_to_active_buffer() {
        let mut grid = grid(8, 8);
        let idx = grid.index(3, 4);
        grid.set_alive(idx);
        assert!(grid.is_alive_at(3, 4));
        assert!(grid.is_alive_at(11, -4));
        grid.set_state(idx, false);
        assert!(!grid.is_alive(idx));
        grid.toggle(idx);
        assert!(grid.is_alive(idx));
        grid.set_dead(idx);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn step_flips_role_and_counts_generation() {
        let mut grid = grid(8, 8);
        let before = grid.active;
        grid.step();
        assert_eq!(grid.active, before.other());
        assert_eq!(grid.generation(), 1);
        grid.step();
        assert_eq!(grid.active, before);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn saturated_torus_dies_in_one_step() {
        let mut grid = grid(8, 8);
        (0..64).for_each(|i| grid.set_alive(i));
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn future_buffer_is_fully_overwritten() {
        // Stale bits left in the scratch buffer must not leak into the next generation.
        let mut grid = grid(10, 7);
        let (_, future) = grid.split_for_step();
        (0..70).for_each(|i| future.set_alive(i));
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn padding_bits_stay_clear() {
        let mut grid = grid(9, 9);
        for x in 6..9 {
            grid.set_alive(grid.index(x, 8));
        }
        grid.step();
        assert_eq!(grid.population(), 3);
        grid.step();
        let last = *grid.active().words().last().unwrap();
        assert_eq!(last >> (81 - WORD_BITS), 0);
    }

    #[test]
    fn live_neighbors_wrap() {
        let mut grid = grid(4, 4);
        grid.set_alive(grid.index(3, 3));
        grid.set_alive(grid.index(1, 0));
        assert_eq!(grid.live_neighbors(0, 0), 2);
        assert_eq!(grid.live_neighbors(4, 4), 2);
    }

    #[test]
    fn clear_resets_cells_and_generation() {
        let mut grid = grid(6, 6);
        grid.set_alive(7);
        grid.step();
        grid.set_alive(3);
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn raw_index_past_last_cell_panics() {
        // 8x7 = 56 cells; index 60 is still inside the first word.
        grid(8, 7).set_alive(60);
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let mut grid = grid(16, 16);
        let empty = grid.fingerprint();
        grid.set_alive(100);
        assert_ne!(grid.fingerprint(), empty);
        grid.set_dead(100);
        assert_eq!(grid.fingerprint(), empty);
    }
}
