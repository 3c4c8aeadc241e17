// simulation.rs - Per-frame driver: one generation, then one render

use crate::config::{LifeConfig, ViewConfig};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::history::CycleDetector;
use crate::patterns::{self, Pattern};
use crate::render::{CellCanvas, Frame, Palette, Viewport};
use crate::stepper::Stepper;

/// Outcome of advancing one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    /// The new generation repeats one of the last few.
    pub cycle: bool,
}

/// Owns the grid and everything needed to advance and display it.
pub struct Simulation {
    grid: Grid,
    stepper: Stepper,
    viewport: Viewport,
    pub palette: Palette,
    cycles: CycleDetector,
}

impl Simulation {
    pub fn new(life: &LifeConfig, view: &ViewConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::new(life)?,
            stepper: Stepper::new(life.threads)?,
            viewport: Viewport::new(view)?,
            palette: Palette::default(),
            cycles: CycleDetector::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct cell edits; call [`Simulation::restart`] afterwards if
    /// cycle tracking should start over.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn seed(&mut self, pattern: &Pattern, x: i64, y: i64) {
        patterns::seed(&mut self.grid, pattern, x, y);
        self.restart();
    }

    /// Seeds `pattern` centered on `(x, y)`.
    pub fn seed_centered(&mut self, pattern: &Pattern, x: i64, y: i64) {
        patterns::seed_centered(&mut self.grid, pattern, x, y);
        self.restart();
    }

    pub fn seed_reference(&mut self) {
        patterns::seed_reference(&mut self.grid);
        self.restart();
    }

    pub fn scatter(&mut self, density: f64, seed: u64) -> Result<(), ConfigError> {
        patterns::scatter(&mut self.grid, density, seed)?;
        self.restart();
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.restart();
    }

    /// Forgets remembered generations.
    pub fn restart(&mut self) {
        self.cycles.reset();
    }

    pub fn step(&mut self) -> StepReport {
        // Remember the starting state after a reset so a still life shows
        // up on the very next step.
        if self.cycles.is_empty() {
            self.cycles.observe(&self.grid);
        }
        self.stepper.step(&mut self.grid);
        StepReport {
            generation: self.grid.generation(),
            cycle: self.cycles.observe(&self.grid),
        }
    }

    /// Samples the viewport from the current generation.
    pub fn sample(&self) -> Frame {
        self.stepper.install(|| self.viewport.sample(&self.grid))
    }

    pub fn render(&self, canvas: &mut impl CellCanvas) {
        let frame = self.sample();
        self.viewport.draw(&frame, &self.palette, canvas);
    }

    /// One display frame: advance a generation, then draw it.
    pub fn frame(&mut self, canvas: &mut impl CellCanvas) -> StepReport {
        let report = self.step();
        self.render(canvas);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::BLOCK;
    use crate::render::Rgba;

    #[derive(Default)]
    struct Counter {
        calls: usize,
        alive: usize,
    }

    impl CellCanvas for Counter {
        fn draw_cell(&mut self, _: i32, _: i32, _: i32, _: i32, color: Rgba) {
            self.calls += 1;
            if color == Rgba::WHITE {
                self.alive += 1;
            }
        }
    }

    fn simulation() -> Simulation {
        let life = LifeConfig::new(200, 200).with_threads(2);
        let view = ViewConfig { width: 20, height: 20, cell_size: 4 };
        Simulation::new(&life, &view).unwrap()
    }

    #[test]
    fn frame_steps_once_then_draws_viewport() {
        let mut sim = simulation();
        sim.seed_reference();
        let mut canvas = Counter::default();
        let report = sim.frame(&mut canvas);
        assert_eq!(report.generation, 1);
        assert_eq!(canvas.calls, 400);
        // Blinker and glider both keep their cell counts.
        assert_eq!(canvas.alive, 8);
    }

    #[test]
    fn still_life_reports_cycle() {
        let mut sim = simulation();
        sim.seed(&BLOCK, 5, 5);
        assert!(sim.step().cycle);
    }

    #[test]
    fn still_life_seeded_mid_run_reports_cycle_next_step() {
        let mut sim = simulation();
        sim.seed(&BLOCK, 5, 5);
        sim.step();
        sim.step();
        // A second block added at generation 2 forgets the old history.
        sim.seed(&BLOCK, 50, 50);
        assert_eq!(sim.generation(), 2);
        let report = sim.step();
        assert_eq!(report.generation, 3);
        assert!(report.cycle);
    }

    #[test]
    fn bad_density_leaves_grid_untouched() {
        let mut sim = simulation();
        assert!(matches!(sim.scatter(f64::NAN, 1), Err(ConfigError::InvalidDensity { .. })));
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn reference_scene_cycles_only_through_blinker_and_glider() {
        let mut sim = simulation();
        sim.seed_reference();
        for _ in 0..12 {
            assert!(!sim.step().cycle);
        }
    }

    #[test]
    fn clear_restarts_generation() {
        let mut sim = simulation();
        sim.scatter(0.3, 9).unwrap();
        sim.step();
        sim.clear();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn invalid_view_is_rejected() {
        let view = ViewConfig { width: 0, ..ViewConfig::default() };
        assert!(Simulation::new(&LifeConfig::new(10, 10), &view).is_err());
    }
}
