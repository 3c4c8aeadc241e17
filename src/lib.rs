//! Conway's Game of Life on a fixed-size torus.
//!
//! Cells are packed one bit each into two buffers. A step reads the active
//! buffer, writes every cell's next state into the other one and then swaps
//! their roles, so readers only ever see complete generations. Stepping can
//! be spread over a thread pool in word-aligned chunks; rendering reads a
//! window of the active buffer and hands one colored square per cell to a
//! [`render::CellCanvas`].
//!
//! ```
//! use torus_life::{Grid, LifeConfig, patterns};
//!
//! let mut grid = Grid::new(&LifeConfig::new(32, 32)).unwrap();
//! patterns::seed(&mut grid, &patterns::BLINKER, 4, 5);
//! grid.step();
//! assert!(grid.is_alive_at(5, 4) && grid.is_alive_at(5, 6));
//! ```

pub mod bits;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod index;
pub mod neighbors;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod simulation;
pub mod stepper;

pub use config::{LifeConfig, ViewConfig};
pub use error::ConfigError;
pub use grid::Grid;
pub use index::Torus;
pub use render::{CellCanvas, Palette, Rgba, Viewport};
pub use simulation::{Simulation, StepReport};
pub use stepper::Stepper;
