//! Fanorona GUI
//!
//! A graphical interface for two players sharing one screen.

use fanorona::ui::FanoronaApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fanorona=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 650.0])
            .with_min_inner_size([860.0, 480.0])
            .with_title("Fanorona"),
        ..Default::default()
    };

    eframe::run_native(
        "Fanorona",
        options,
        Box::new(|cc| Ok(Box::new(FanoronaApp::new(cc)))),
    )
}
