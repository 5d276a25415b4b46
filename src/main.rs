#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use mini_paint::app::{STATUS_BAR_HEIGHT, USAGE};
use mini_paint::{PaintApp, PaintConfig, PaintResult};

fn main() -> PaintResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PaintConfig::from_env()?;
    log::info!("Starting the App");
    log::info!("{}", USAGE);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([
                config.canvas_width as f32,
                config.canvas_height as f32 + STATUS_BAR_HEIGHT,
            ])
            .with_resizable(false),
        vsync: true,
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )?;
    Ok(())
}
