// main.rs - Windowed viewer for the torus Game of Life
// Parses the configuration, seeds the grid and hands it to the egui app in ui.rs

use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use torus_life::Simulation;

mod args;  // Command line flags
mod ui;    // eframe::App and the egui canvas

use args::Args;
use ui::LifeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let life = args.life_config();
    let view = args.view_config();

    let mut simulation = Simulation::new(&life, &view)?;
    match args.random {
        Some(density) => simulation.scatter(density, args.seed)?,
        None => simulation.seed_reference(),
    }
    info!(
        width = life.width,
        height = life.height,
        view_width = view.width,
        view_height = view.height,
        population = simulation.grid().population(),
        "starting viewer"
    );

    let (screen_w, screen_h) = simulation.viewport().screen_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cellular Automata")
            .with_inner_size([screen_w as f32 + 40.0, screen_h as f32 + 160.0]),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Cellular Automata",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(simulation))),
    )?;
    Ok(())
}
