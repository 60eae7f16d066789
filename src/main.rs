use eframe::egui;

use marksboard::app::MarksboardApp;
use marksboard::data::loader;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset must load before any UI appears; a missing or
    // unparsable file halts the session with a visible error.
    let dataset = match loader::load_cached(loader::DATA_PATH) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("startup failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Marksboard – CSV Dataset Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(MarksboardApp::new(dataset)))),
    )
}
