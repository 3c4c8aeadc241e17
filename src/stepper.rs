// stepper.rs - Generation stepping across a worker pool

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::bits::WORD_BITS;
use crate::error::ConfigError;
use crate::grid::{Grid, advance_words};

// Chunks handed out per worker; more than one lets rayon balance load.
const CHUNKS_PER_THREAD: usize = 4;

/// Steps a [`Grid`] with the future buffer split across a thread pool.
///
/// Each worker owns a run of whole words of the future buffer and only
/// reads the active buffer, so no two workers ever touch the same word.
pub struct Stepper {
    pool: ThreadPool,
}

impl Stepper {
    /// Pool of `threads` workers; `0` picks one per available core.
    pub fn new(threads: usize) -> Result<Self, ConfigError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("life-step-{i}"))
            .build()?;
        debug!(threads = pool.current_num_threads(), "built stepping pool");
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Words per work item for a grid of `cells` cells.
    pub fn chunk_words(&self, cells: usize) -> usize {
        let words = cells.div_ceil(WORD_BITS);
        words.div_ceil(self.threads() * CHUNKS_PER_THREAD).max(1)
    }

    /// Advances `grid` one generation.
    pub fn step(&self, grid: &mut Grid) {
        let torus = grid.torus();
        let chunk = self.chunk_words(torus.cell_count());
        let (active, future) = grid.split_for_step();
        self.pool.install(|| {
            future
                .words_mut()
                .par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(i, words)| advance_words(&torus, active, words, i * chunk));
        });
        grid.flip();
    }

    /// Runs `op` inside the pool so nested rayon work uses its workers.
    pub fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        self.pool.install(op)
    }
}
