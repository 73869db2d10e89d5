use std::path::PathBuf;

use eframe::egui;

use crate::app::EventSummaryApp;
use crate::model::EventTable;

pub fn run(table: EventTable, source_path: PathBuf) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Summary")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Event Summary",
        native_options,
        Box::new(move |_cc| Box::new(EventSummaryApp::new(table, source_path))),
    )
}
