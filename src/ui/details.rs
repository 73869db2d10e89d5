use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::model::EventType;
use crate::pipeline::DisplayModel;

/// Raw filtered rows, date ascending, behind a disclosure closed by default.
pub fn details_section(ui: &mut egui::Ui, model: &DisplayModel) {
    egui::CollapsingHeader::new("View Daily Event Details")
        .default_open(false)
        .show(ui, |ui| {
            if model.rows.is_empty() {
                ui.label("No rows match the current filters.");
                return;
            }
            detail_table(ui, model);
        });
}

fn detail_table(ui: &mut egui::Ui, model: &DisplayModel) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(true)
        .max_scroll_height(300.0)
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(95.0))
        .columns(Column::remainder(), EventType::ALL.len())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Facility");
            });
            header.col(|ui| {
                ui.strong("Date");
            });
            for ty in EventType::ALL {
                header.col(|ui| {
                    ui.strong(ty.label());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, model.rows.len(), |mut row| {
                let ev = model.rows[row.index()];
                row.col(|ui| {
                    ui.label(&ev.facility);
                });
                row.col(|ui| {
                    ui.monospace(ev.event_date.format("%Y-%m-%d").to_string());
                });
                for ty in EventType::ALL {
                    row.col(|ui| {
                        ui.monospace(ev.counts.get(ty).to_string());
                    });
                }
            });
        });
}
