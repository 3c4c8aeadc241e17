// index.rs - Toroidal coordinate <-> linear cell index mapping

use crate::config::LifeConfig;
use crate::error::ConfigError;

/// Dimensions of a wrapping grid. Cell `(x, y)` lives at `y * width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Torus {
    width: usize,
    height: usize,
}

impl Torus {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        LifeConfig::new(width, height).validate()?;
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Wraps any integer coordinate onto the torus and returns its index.
    pub fn index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        y * self.width + x
    }

    /// Inverse of [`Torus::index`]; indices past the end wrap around.
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        let idx = idx % self.cell_count();
        (idx % self.width, idx / self.width)
    }

    /// Index of the cell one step away from an in-range `(x, y)`.
    ///
    /// `dx` and `dy` must be in `-1..=1`; this avoids the division in
    /// [`Torus::index`] on the per-cell neighbor path.
    #[inline]
    pub fn offset_index(&self, x: usize, y: usize, dx: i8, dy: i8) -> usize {
        shift(y, dy, self.height) * self.width + shift(x, dx, self.width)
    }
}

#[inline]
fn shift(v: usize, delta: i8, size: usize) -> usize {
    debug_assert!(v < size && (-1..=1).contains(&delta));
    match delta {
        -1 if v == 0 => size - 1,
        -1 => v - 1,
        1 if v + 1 == size => 0,
        1 => v + 1,
        _ => v,
    }
}
