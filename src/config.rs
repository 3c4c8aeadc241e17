// config.rs - Grid and viewport configuration

use crate::error::ConfigError;

// Reference configuration
pub const DEFAULT_GRID_WIDTH: usize = 1000;
pub const DEFAULT_GRID_HEIGHT: usize = 1000;
pub const DEFAULT_VIEW_WIDTH: usize = 100;     // Displayed cells per row
pub const DEFAULT_VIEW_HEIGHT: usize = 100;    // Displayed cells per column
pub const DEFAULT_CELL_SIZE: u32 = 10;         // On-screen pixels per cell

/// Size of the simulated torus and how many workers step it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Stepping workers; `0` uses one per available core.
    pub threads: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            threads: 0,
        }
    }
}

impl LifeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Checks the dimensions describe an addressable torus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { what: "grid width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { what: "grid height" });
        }
        let too_large = ConfigError::TooLarge { width: self.width, height: self.height };
        // Coordinates are wrapped as i64, so each side must fit one.
        if i64::try_from(self.width).is_err() || i64::try_from(self.height).is_err() {
            return Err(too_large);
        }
        self.width.checked_mul(self.height).map(|_| ()).ok_or(too_large)
    }
}

/// Checks a random-fill density is a probability.
pub fn validate_density(density: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(ConfigError::InvalidDensity { density })
    }
}

/// The window of the torus that gets drawn each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEW_WIDTH,
            height: DEFAULT_VIEW_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { what: "viewport width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { what: "viewport height" });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroDimension { what: "cell size" });
        }
        let fits = |cells: usize| {
            u64::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(u64::from(self.cell_size)))
                .is_some_and(|pixels| pixels <= i32::MAX as u64)
        };
        if fits(self.width) && fits(self.height) {
            Ok(())
        } else {
            Err(ConfigError::ScreenTooLarge {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            })
        }
    }

    /// Screen size in pixels: (width, height).
    pub fn screen_size(&self) -> (u64, u64) {
        let cell = u64::from(self.cell_size);
        (self.width as u64 * cell, self.height as u64 * cell)
    }
}
