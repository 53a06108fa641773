//! FarmAssist History - a desktop viewer for the FarmAssist conversation log
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime fetching history over HTTP
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use farmassist_history::app::HistoryApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FarmAssist - Conversation History",
        options,
        Box::new(|cc| Ok(Box::new(HistoryApp::new(cc)))),
    )
}
