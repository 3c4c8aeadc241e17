//! # Command Line Arguments
//!
//! Sizes of the simulated torus and of the drawn window, the stepping worker
//! count, and how the grid is seeded at start-up.

use clap::Parser;
use torus_life::config::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_VIEW_HEIGHT,
    DEFAULT_VIEW_WIDTH, validate_density,
};
use torus_life::{LifeConfig, ViewConfig};

/// Command line arguments for the Game of Life viewer.
///
/// ## Examples
///
/// ```bash
/// # Reference scene on a 1000x1000 torus, 100x100 cells shown
/// cargo run --release
///
/// # 30% random soup, 4 stepping threads
/// cargo run --release -- --random 0.3 --seed 7 --threads 4
/// ```
#[derive(Parser, Debug)]
#[command(name = "torus_life", about = "Conway's Game of Life on a torus")]
pub struct Args {
    /// Cells per row of the torus
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Rows of the torus
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Stepping threads (0 = one per core)
    #[arg(short = 't', long, default_value_t = 0)]
    pub threads: usize,

    /// Displayed cells per row
    #[arg(long, default_value_t = DEFAULT_VIEW_WIDTH)]
    pub view_width: usize,

    /// Displayed rows
    #[arg(long, default_value_t = DEFAULT_VIEW_HEIGHT)]
    pub view_height: usize,

    /// On-screen size of one cell in pixels
    #[arg(short = 'c', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Fill the grid randomly with this share of live cells instead of the
    /// blinker-and-glider start-up scene
    #[arg(short = 'r', long, value_parser = parse_density)]
    pub random: Option<f64>,

    /// Random fill seed
    #[arg(short = 's', long, default_value_t = 0)]
    pub seed: u64,
}

/// Parses a live-cell share, rejecting anything outside `[0, 1]` (NaN included).
fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value.parse().map_err(|err| format!("{err}"))?;
    validate_density(density).map_err(|err| err.to_string())
}

impl Args {
    pub fn life_config(&self) -> LifeConfig {
        LifeConfig::new(self.width, self.height).with_threads(self.threads)
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            width: self.view_width,
            height: self.view_height,
            cell_size: self.cell_size,
        }
    }
}
