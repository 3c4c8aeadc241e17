// render.rs - Feeding the visible window of the grid to a drawing surface

use rayon::prelude::*;

use crate::config::ViewConfig;
use crate::error::ConfigError;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// The two colors a cell can be drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub dead: Rgba,
    pub alive: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self { dead: Rgba::BLACK, alive: Rgba::WHITE }
    }
}

impl Palette {
    pub const fn color(&self, alive: bool) -> Rgba {
        if alive { self.alive } else { self.dead }
    }
}

/// Surface the renderer draws onto, one filled square per displayed cell.
pub trait CellCanvas {
    fn draw_cell(&mut self, screen_x: i32, screen_y: i32, width: i32, height: i32, color: Rgba);
}

/// Cell states of the viewport, row-major, captured from one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Frame {
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// The top-left `width x height` cells of the torus, drawn as squares of
/// `cell_size` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
    cell_size: i32,
}

impl Viewport {
    pub fn new(config: &ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            height: config.height,
            // validate() guarantees every screen coordinate fits in i32
            cell_size: config.cell_size as i32,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Screen size in pixels.
    pub fn screen_size(&self) -> (i32, i32) {
        (self.width as i32 * self.cell_size, self.height as i32 * self.cell_size)
    }

    /// Cell under a screen position, if it lies inside the viewport.
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let x = (screen_x / self.cell_size as f32) as usize;
        let y = (screen_y / self.cell_size as f32) as usize;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Reads the active generation under the viewport, rows in parallel.
    /// A viewport wider or taller than the grid shows it tiled.
    pub fn sample(&self, grid: &Grid) -> Frame {
        let mut cells = vec![false; self.width * self.height];
        cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = grid.is_alive_at(x as i64, y as i64);
                }
            });
        Frame { width: self.width, height: self.height, cells }
    }

    /// Issues one draw call per displayed cell, row by row.
    pub fn draw(&self, frame: &Frame, palette: &Palette, canvas: &mut impl CellCanvas) {
        let size = self.cell_size;
        for y in 0..frame.height {
            for x in 0..frame.width {
                canvas.draw_cell(
                    x as i32 * size,
                    y as i32 * size,
                    size,
                    size,
                    palette.color(frame.is_alive(x, y)),
                );
            }
        }
    }

    /// Samples and draws the current generation.
    pub fn render(&self, grid: &Grid, palette: &Palette, canvas: &mut impl CellCanvas) {
        let frame = self.sample(grid);
        self.draw(&frame, palette, canvas);
    }
}
