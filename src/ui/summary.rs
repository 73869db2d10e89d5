use eframe::egui;

use crate::app::EventSummaryApp;
use crate::pipeline::DisplayModel;
use crate::ui::{chart, details, format_thousands};

pub fn summary_panel(ui: &mut egui::Ui, app: &EventSummaryApp) {
    let model = DisplayModel::build(&app.table, &app.selection);

    ui.heading("Event Summary");
    ui.add_space(8.0);

    kpi_row(ui, &model);
    ui.add_space(12.0);

    chart::timeline_chart(ui, &model);
    ui.add_space(12.0);

    details::details_section(ui, &model);
}

fn kpi_row(ui: &mut egui::Ui, model: &DisplayModel) {
    ui.columns(2, |cols| {
        kpi_card(
            &mut cols[0],
            "Overall Event Count",
            &format_thousands(model.total_count),
        );
        kpi_card(&mut cols[1], "Days Selected", &model.day_count.to_string());
    });
}

fn kpi_card(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(label).small());
        ui.label(egui::RichText::new(value).heading().strong());
    });
}
