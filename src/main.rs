#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use network_diagram::app::NetworkApp;
use network_diagram::config::{self, Settings};
use network_diagram::{cli, logging};

fn main() -> eframe::Result<()> {
    let cli = cli::parse();
    let loaded = Settings::load_from(&config::settings_path());
    let saved_level = loaded.as_ref().ok().and_then(|s| s.log_level);
    if let Err(e) = logging::init_logging(cli.log_level, saved_level) {
        eprintln!("logging disabled: {e}");
    }
    let settings = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default settings");
        Settings::default()
    });
    let canvas_size = settings.startup_canvas_size(&cli);
    tracing::debug!(width = canvas_size.x, height = canvas_size.y, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Rust Network Diagram"),
        ..Default::default()
    };

    let initial_file = cli.file;
    eframe::run_native(
        "Rust Network Diagram",
        options,
        Box::new(move |cc| Ok(Box::new(NetworkApp::new(cc, settings, canvas_size, initial_file)))),
    )
}
