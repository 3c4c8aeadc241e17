// ui.rs - egui front end: controls plus the per-frame step and draw

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Vec2};
use tracing::warn;

use torus_life::patterns::PATTERNS;
use torus_life::{CellCanvas, Palette, Rgba, Simulation};

/// Draws cells as filled rectangles offset from the painter's top-left.
struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl CellCanvas for EguiCanvas<'_> {
    fn draw_cell(&mut self, screen_x: i32, screen_y: i32, width: i32, height: i32, color: Rgba) {
        let min = self.origin + Vec2::new(screen_x as f32, screen_y as f32);
        let rect = Rect::from_min_size(min, Vec2::new(width as f32, height as f32));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }
}

fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_rgba(color: Color32) -> Rgba {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Rgba::new(r, g, b, a)
}

pub struct LifeApp {
    simulation: Simulation,
    is_running: bool,
    selected_pattern: usize,
    anchor_x: i64,
    anchor_y: i64,
    density: f64,
    next_seed: u64,
    live_color: Color32,
    dead_color: Color32,
}

impl LifeApp {
    pub fn new(simulation: Simulation) -> Self {
        let palette = simulation.palette;
        let viewport = simulation.viewport();
        let (anchor_x, anchor_y) = (viewport.width() as i64 / 2, viewport.height() as i64 / 2);
        Self {
            simulation,
            is_running: true,
            selected_pattern: 0,
            anchor_x,
            anchor_y,
            density: 0.3,
            next_seed: 1,
            live_color: to_color32(palette.alive),
            dead_color: to_color32(palette.dead),
        }
    }

    fn step(&mut self) {
        if self.simulation.step().cycle {
            self.is_running = false;
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.is_running = !self.is_running;
                if self.is_running {
                    self.simulation.restart();
                }
            }

            if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                self.step();
            }

            if ui.button("⏹ Clear").clicked() {
                self.is_running = false;
                self.simulation.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.is_running = false;
                self.simulation.clear();
                if let Err(err) = self.simulation.scatter(self.density, self.next_seed) {
                    warn!(%err, "random fill rejected");
                }
                self.next_seed += 1;
            }
            ui.add(egui::Slider::new(&mut self.density, 0.0..=1.0).text("density"));

            ui.separator();

            ui.label(format!("Generation: {}", self.simulation.generation()));
        });

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            ui.add(egui::DragValue::new(&mut self.anchor_x).prefix("x: "));
            ui.add(egui::DragValue::new(&mut self.anchor_y).prefix("y: "));

            if ui.button("Apply Pattern").clicked() {
                let pattern = &PATTERNS[self.selected_pattern];
                self.simulation.seed_centered(pattern, self.anchor_x, self.anchor_y);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn grid_view(&mut self, ui: &mut egui::Ui) {
        self.simulation.palette = Palette {
            dead: to_rgba(self.dead_color),
            alive: to_rgba(self.live_color),
        };

        let viewport = *self.simulation.viewport();
        let (width, height) = viewport.screen_size();
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width as f32, height as f32), egui::Sense::click());
        let origin = response.rect.min;
        self.simulation.render(&mut EguiCanvas { painter: &painter, origin });

        // Click to toggle cells while paused
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                if let Some((x, y)) = viewport.cell_at(local.x, local.y) {
                    let grid = self.simulation.grid_mut();
                    let idx = grid.index(x as i64, y as i64);
                    grid.toggle(idx);
                    self.simulation.restart();
                    ui.ctx().request_repaint();
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One generation per displayed frame while running
        if self.is_running {
            self.step();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);

            ui.separator();

            self.grid_view(ui);

            ui.separator();

            let grid = self.simulation.grid();
            let cells = grid.width() * grid.height();
            let live_cells = grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", cells - live_cells));
                ui.label(format!("Population: {:.2}%", live_cells as f64 / cells as f64 * 100.0));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
