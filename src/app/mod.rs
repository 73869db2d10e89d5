mod run;
mod ui_state;

use std::path::PathBuf;

use eframe::egui;

use crate::model::EventTable;
use crate::pipeline::FilterSelection;

pub use run::run;
pub use ui_state::UiState;

pub struct EventSummaryApp {
    pub table: EventTable,
    pub selection: FilterSelection,
    pub source_path: PathBuf,
    pub ui: UiState,
}

impl EventSummaryApp {
    pub fn new(table: EventTable, source_path: PathBuf) -> Self {
        let selection = FilterSelection::defaults(&table);
        Self {
            table,
            selection,
            source_path,
            ui: UiState::default(),
        }
    }

    /// Replace the loaded table wholesale and reset the filters to the new
    /// data's defaults. Used by File -> Open; startup load happens in main.
    pub fn load_events(&mut self, path: PathBuf) -> anyhow::Result<()> {
        self.ui.last_error = None;
        let table = crate::ingest::load_events(&path)?;
        self.selection = FilterSelection::defaults(&table);
        self.table = table;
        self.source_path = path;
        Ok(())
    }
}

impl eframe::App for EventSummaryApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}
