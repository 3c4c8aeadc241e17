// patterns.rs - Known shapes and random fill for seeding a grid

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::validate_density;
use crate::error::ConfigError;
use crate::grid::Grid;

/// A named shape as (dx, dy) offsets from its anchor cell.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

/// Travels one cell right and one cell down every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "Lightweight spaceship",
    cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        // Left block
        (0, 4), (1, 4), (0, 5), (1, 5),
        // Left ship
        (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
        (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
        (16, 6), (17, 5),
        // Right ship
        (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
        (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
        // Right block
        (34, 2), (34, 3), (35, 2), (35, 3),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    R_PENTOMINO,
    LIGHTWEIGHT_SPACESHIP,
    GOSPER_GLIDER_GUN,
];

impl Pattern {
    /// Width and height of the bounding box.
    pub fn extent(&self) -> (i64, i64) {
        let max_x = self.cells.iter().map(|&(dx, _)| dx).max().unwrap_or(-1);
        let max_y = self.cells.iter().map(|&(_, dy)| dy).max().unwrap_or(-1);
        (max_x + 1, max_y + 1)
    }
}

/// Sets the pattern's cells alive around `(x, y)`, wrapping at the edges.
/// Cells already alive stay alive; nothing is cleared.
pub fn seed(grid: &mut Grid, pattern: &Pattern, x: i64, y: i64) {
    for &(dx, dy) in pattern.cells {
        let idx = grid.index(x + dx, y + dy);
        grid.set_alive(idx);
    }
    debug!(pattern = pattern.name, x, y, "seeded pattern");
}

/// Seeds the pattern with its bounding box centered on `(x, y)`.
pub fn seed_centered(grid: &mut Grid, pattern: &Pattern, x: i64, y: i64) {
    let (width, height) = pattern.extent();
    seed(grid, pattern, x - width / 2, y - height / 2);
}

/// The start-up scene: a blinker at (4, 5) and a glider at (10, 10).
pub fn seed_reference(grid: &mut Grid) {
    seed(grid, &BLINKER, 4, 5);
    seed(grid, &GLIDER, 10, 10);
}

/// Sets each cell alive with probability `density`, reproducibly for a `seed`.
/// Fails without touching the grid unless `density` is in `[0, 1]`.
pub fn scatter(grid: &mut Grid, density: f64, seed: u64) -> Result<(), ConfigError> {
    let density = validate_density(density)?;
    let mut rng = StdRng::seed_from_u64(seed);
    for idx in 0..grid.torus().cell_count() {
        if rng.random_bool(density) {
            grid.set_alive(idx);
        }
    }
    debug!(density, seed, population = grid.population(), "scattered random cells");
    Ok(())
}
