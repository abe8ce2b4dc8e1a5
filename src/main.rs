// Rust Countdown Application
// Main entry point

use rust_countdown::ui_egui::CountdownApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Countdown Application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rust Countdown")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Countdown",
        options,
        Box::new(|cc| Ok(Box::new(CountdownApp::new(cc)))),
    )
}
