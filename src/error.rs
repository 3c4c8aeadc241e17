// error.rs - Configuration errors, the only failure the engine can report

use thiserror::Error;

/// Rejected construction parameters for a grid, viewport or worker pool.
///
/// Everything past construction is total: wrapped coordinates always land
/// on a cell and bit addressing stays inside the buffers.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{what} must be greater than zero")]
    ZeroDimension { what: &'static str },

    #[error("grid of {width}x{height} cells cannot be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("viewport of {width}x{height} cells at {cell_size}px does not fit screen coordinates")]
    ScreenTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },

    #[error("live cell density {density} must be between 0 and 1")]
    InvalidDensity { density: f64 },

    #[error("failed to build stepping thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
