// main.rs - Desktop viewer for the Game of Life simulation loop

use eframe::egui;

mod ui;
mod viewer;

use viewer::LifeViewer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The simulation loop runs here; the UI thread only draws its frames.
    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeViewer::new(cc.egui_ctx.clone(), runtime))),
    )?;
    Ok(())
}
